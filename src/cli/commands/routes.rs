//! Routes command - List the addressable views

use serde::Serialize;

use crate::domain::{fields_for_step, WIZARD_STEPS};
use crate::errors::{Result, WizardError};
use crate::schemas::WizardStep;

/// One addressable view
#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    pub route: &'static str,
    pub step: WizardStep,
    pub title: &'static str,
    pub fields: Vec<&'static str>,
}

/// Describe every view, in navigation order
pub fn route_table() -> Vec<RouteInfo> {
    WIZARD_STEPS
        .iter()
        .map(|&step| RouteInfo {
            route: step.route(),
            step,
            title: step.title(),
            fields: fields_for_step(step).iter().map(|s| s.name).collect(),
        })
        .collect()
}

/// Format the route table for the terminal
pub fn format_routes(routes: &[RouteInfo]) -> String {
    routes
        .iter()
        .map(|r| {
            let fields = if r.fields.is_empty() {
                "-".to_string()
            } else {
                r.fields.join(", ")
            };
            format!("{:<16} {:<22} {}", r.route, r.title, fields)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// List the addressable views
pub async fn run(json: bool) -> Result<()> {
    let routes = route_table();
    if json {
        let out = serde_json::to_string_pretty(&routes)
            .map_err(|e| WizardError::InvalidJson(e.to_string()))?;
        println!("{}", out);
    } else {
        println!("{}", format_routes(&routes));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        let routes = route_table();
        let paths: Vec<_> = routes.iter().map(|r| r.route).collect();
        assert_eq!(paths, vec!["/signup/step1", "/signup/step2", "/signup/step3", "/"]);
        assert_eq!(routes[0].fields, vec!["fullName", "email", "phone"]);
        assert!(routes[2].fields.is_empty());
    }

    #[test]
    fn test_format_routes() {
        let text = format_routes(&route_table());
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("/signup/step1"));
        assert!(first.contains("Personal Information"));
        assert!(text.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn test_routes_json_shape() {
        let json = serde_json::to_value(route_table()).unwrap();
        assert_eq!(json[1]["step"], "step2");
        assert_eq!(json[1]["route"], "/signup/step2");
    }
}
