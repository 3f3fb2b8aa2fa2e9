//! Top-level screen flow: landing → domain select → interview → report

use crate::domain::{self, Domain};
use crate::session::Message;
use thiserror::Error;
use tracing::debug;

/// Screen currently shown
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing,
    DomainSelect,
    Interview { domain: Domain },
    Report { domain: Domain, transcript: Vec<Message> },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::DomainSelect => "domain-select",
            Screen::Interview { .. } => "interview",
            Screen::Report { .. } => "report",
        }
    }

    /// Domain selected for the interview or report, if any
    pub fn domain(&self) -> Option<&Domain> {
        match self {
            Screen::Interview { domain } | Screen::Report { domain, .. } => Some(domain),
            Screen::Landing | Screen::DomainSelect => None,
        }
    }
}

/// User actions that move between screens
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// Landing → domain select
    StartInterview,
    /// Domain select → interview
    SelectDomain(Domain),
    /// Interview → report
    Complete(Vec<Message>),
    /// Interview → domain select, without a transcript
    ExitInterview,
    /// Domain select or report → landing
    BackToLanding,
    /// Report → domain select
    StartNew,
}

impl ScreenEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenEvent::StartInterview => "start-interview",
            ScreenEvent::SelectDomain(_) => "select-domain",
            ScreenEvent::Complete(_) => "complete",
            ScreenEvent::ExitInterview => "exit-interview",
            ScreenEvent::BackToLanding => "back-to-landing",
            ScreenEvent::StartNew => "start-new",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Cannot {event} from the {from} screen")]
    Invalid {
        from: &'static str,
        event: &'static str,
    },

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),
}

/// Apply an event to a screen
pub fn transition(screen: Screen, event: ScreenEvent) -> Result<Screen, TransitionError> {
    let from = screen.name();
    let event_name = event.name();

    let next = match (screen, event) {
        (Screen::Landing, ScreenEvent::StartInterview) => Screen::DomainSelect,
        (Screen::DomainSelect, ScreenEvent::SelectDomain(domain)) => Screen::Interview { domain },
        (Screen::DomainSelect, ScreenEvent::BackToLanding) => Screen::Landing,
        (Screen::Interview { domain }, ScreenEvent::Complete(transcript)) => {
            Screen::Report { domain, transcript }
        }
        (Screen::Interview { .. }, ScreenEvent::ExitInterview) => Screen::DomainSelect,
        (Screen::Report { .. }, ScreenEvent::BackToLanding) => Screen::Landing,
        (Screen::Report { .. }, ScreenEvent::StartNew) => Screen::DomainSelect,
        _ => {
            return Err(TransitionError::Invalid {
                from,
                event: event_name,
            })
        }
    };

    debug!("Screen {} --{}--> {}", from, event_name, next.name());
    Ok(next)
}

/// Holds the current screen and applies transitions in place
#[derive(Debug, Clone)]
pub struct Router {
    screen: Screen,
}

impl Router {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Apply an event; on error the current screen is kept
    pub fn apply(&mut self, event: ScreenEvent) -> Result<&Screen, TransitionError> {
        self.screen = transition(self.screen.clone(), event)?;
        Ok(&self.screen)
    }

    /// Select a domain from the catalogue by identifier
    pub fn select_domain(&mut self, id: &str) -> Result<&Screen, TransitionError> {
        let domain = domain::find(id).ok_or_else(|| TransitionError::UnknownDomain(id.to_string()))?;
        self.apply(ScreenEvent::SelectDomain(domain))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn software() -> Domain {
        domain::find("software").unwrap()
    }

    #[test]
    fn test_full_happy_path() {
        let mut router = Router::new();
        router.apply(ScreenEvent::StartInterview).unwrap();
        router.select_domain("software").unwrap();
        assert_eq!(router.screen().domain(), Some(&software()));

        let transcript = vec![Message::interviewer(1, "q"), Message::candidate(2, "a")];
        router.apply(ScreenEvent::Complete(transcript.clone())).unwrap();
        assert_eq!(
            router.screen(),
            &Screen::Report {
                domain: software(),
                transcript
            }
        );

        router.apply(ScreenEvent::StartNew).unwrap();
        assert_eq!(router.screen(), &Screen::DomainSelect);
        router.apply(ScreenEvent::BackToLanding).unwrap();
        assert_eq!(router.screen(), &Screen::Landing);
    }

    #[test]
    fn test_interview_requires_domain_selection() {
        let err = transition(Screen::Landing, ScreenEvent::SelectDomain(software())).unwrap_err();
        assert_eq!(
            err,
            TransitionError::Invalid {
                from: "landing",
                event: "select-domain"
            }
        );

        let err = transition(Screen::DomainSelect, ScreenEvent::Complete(vec![])).unwrap_err();
        assert!(matches!(err, TransitionError::Invalid { .. }));
    }

    #[test]
    fn test_exit_returns_to_domain_select() {
        let next = transition(
            Screen::Interview { domain: software() },
            ScreenEvent::ExitInterview,
        )
        .unwrap();
        assert_eq!(next, Screen::DomainSelect);
    }

    #[test]
    fn test_failed_transition_keeps_screen() {
        let mut router = Router::new();
        router.apply(ScreenEvent::StartInterview).unwrap();

        let err = router.select_domain("astrology").unwrap_err();
        assert_eq!(err, TransitionError::UnknownDomain("astrology".to_string()));
        assert_eq!(router.screen(), &Screen::DomainSelect);

        assert!(router.apply(ScreenEvent::StartNew).is_err());
        assert_eq!(router.screen(), &Screen::DomainSelect);
    }
}
