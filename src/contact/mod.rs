pub mod form;
pub mod submit;
pub mod validation;

pub use form::ContactForm;
pub use submit::{HttpSubmitter, SimulatedSubmitter, Submitter};

use futures::future::LocalBoxFuture;

use crate::config::PageConfig;
use submit::SubmitError;
use validation::Lead;

/// Where the contact form sends its leads.
#[derive(Debug, Clone, PartialEq)]
pub enum LeadSubmitter {
    Simulated(SimulatedSubmitter),
    Http(HttpSubmitter),
}

impl Submitter for LeadSubmitter {
    fn submit(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        match self {
            LeadSubmitter::Simulated(submitter) => submitter.submit(lead),
            LeadSubmitter::Http(submitter) => submitter.submit(lead),
        }
    }
}

/// The configured endpoint when there is one, the simulated submission
/// otherwise.
pub fn submitter_for(config: &PageConfig) -> LeadSubmitter {
    match &config.lead_endpoint {
        Some(endpoint) => LeadSubmitter::Http(HttpSubmitter { endpoint: endpoint.clone() }),
        None => LeadSubmitter::Simulated(SimulatedSubmitter { delay_ms: config.form_submit_delay_ms }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_backend_url;

    #[test]
    fn default_config_simulates_with_fixed_delay() {
        assert_eq!(
            submitter_for(&PageConfig::default()),
            LeadSubmitter::Simulated(SimulatedSubmitter { delay_ms: 2000 })
        );
    }

    #[test]
    fn configured_endpoint_posts_over_http() {
        let config = PageConfig::default().with_lead_endpoint("/api/leads");
        assert_eq!(
            submitter_for(&config),
            LeadSubmitter::Http(HttpSubmitter {
                endpoint: format!("{}/api/leads", get_backend_url()),
            })
        );
    }

    #[test]
    fn custom_delay_is_passed_through() {
        let config = PageConfig {
            form_submit_delay_ms: 50,
            ..PageConfig::default()
        };
        assert_eq!(submitter_for(&config), LeadSubmitter::Simulated(SimulatedSubmitter { delay_ms: 50 }));
    }
}
