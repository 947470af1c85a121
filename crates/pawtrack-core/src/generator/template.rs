//! Visit templates and the lookup seam used by the generator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::ServiceType;

/// A reusable visit definition owned by the template registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub service_type: ServiceType,
    pub duration_minutes: u32,
}

impl Template {
    pub fn new(id: impl Into<String>, name: impl Into<String>, service_type: ServiceType, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            service_type,
            duration_minutes,
        }
    }

    /// Built-in templates, one per service type.
    pub fn defaults() -> Vec<Template> {
        vec![
            Template::new("drop-in", "Drop-in", ServiceType::DropIn, 30),
            Template::new("walk", "Walk", ServiceType::Walk, 30),
            Template::new("overnight", "Overnight", ServiceType::Overnight, 720),
            Template::new("housesit", "Housesit", ServiceType::Housesit, 1440),
            Template::new("meet-greet", "Meet & Greet", ServiceType::MeetGreet, 30),
            Template::new("nail-trim", "Nail Trim", ServiceType::NailTrim, 15),
        ]
    }
}

/// Lookup of templates by id.
pub trait TemplateSource {
    fn template(&self, id: &str) -> Option<&Template>;

    /// First template of the given service type.
    fn by_service(&self, service_type: ServiceType) -> Option<&Template>;
}

impl TemplateSource for [Template] {
    fn template(&self, id: &str) -> Option<&Template> {
        self.iter().find(|t| t.id == id)
    }

    fn by_service(&self, service_type: ServiceType) -> Option<&Template> {
        self.iter().find(|t| t.service_type == service_type)
    }
}

impl TemplateSource for Vec<Template> {
    fn template(&self, id: &str) -> Option<&Template> {
        self.as_slice().template(id)
    }

    fn by_service(&self, service_type: ServiceType) -> Option<&Template> {
        self.as_slice().by_service(service_type)
    }
}

impl TemplateSource for HashMap<String, Template> {
    fn template(&self, id: &str) -> Option<&Template> {
        self.get(id)
    }

    fn by_service(&self, service_type: ServiceType) -> Option<&Template> {
        // smallest id wins so the choice is stable
        self.values()
            .filter(|t| t.service_type == service_type)
            .min_by(|a, b| a.id.cmp(&b.id))
    }
}
