//! Badge presentation derived from the health check result.

use ezyres_api_models::HealthStatus;

/// What the badge currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BadgeState {
    /// Health check in flight.
    #[default]
    Checking,
    /// Service reported `OK`.
    Healthy {
        /// Reported service name.
        service: String,
    },
    /// Service reported anything else, or could not be reached.
    Down {
        /// Reported or fallback service name.
        service: String,
    },
}

impl BadgeState {
    /// Map a settled health check onto the badge.
    #[must_use]
    pub fn from_status(status: HealthStatus) -> Self {
        if status.is_healthy() {
            Self::Healthy {
                service: status.service,
            }
        } else {
            Self::Down {
                service: status.service,
            }
        }
    }

    /// Badge caption.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Checking...",
            Self::Healthy { .. } => "API Healthy",
            Self::Down { .. } => "API Down",
        }
    }

    /// Service name once the health check settled.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        match self {
            Self::Checking => None,
            Self::Healthy { service } | Self::Down { service } => Some(service),
        }
    }

    /// Tailwind classes for the pill.
    #[must_use]
    pub const fn tone_class(&self) -> &'static str {
        match self {
            Self::Checking => "bg-gray-100 text-gray-600",
            Self::Healthy { .. } => "bg-green-100 text-green-700",
            Self::Down { .. } => "bg-red-100 text-red-700",
        }
    }

    /// Tailwind classes for the status dot.
    #[must_use]
    pub const fn dot_class(&self) -> &'static str {
        match self {
            Self::Checking => "bg-gray-400 animate-pulse",
            Self::Healthy { .. } => "bg-green-500",
            Self::Down { .. } => "bg-red-500",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ezyres_api_models::FALLBACK_SERVICE_NAME;

    #[test]
    fn ok_status_is_healthy() {
        let state = BadgeState::from_status(HealthStatus {
            status: "OK".into(),
            service: "analytics".into(),
        });
        assert_eq!(state.label(), "API Healthy");
        assert_eq!(state.service(), Some("analytics"));
    }

    #[test]
    fn other_status_is_down() {
        let state = BadgeState::from_status(HealthStatus {
            status: "DEGRADED".into(),
            service: "analytics".into(),
        });
        assert_eq!(state.label(), "API Down");
    }

    #[test]
    fn synthesized_down_keeps_fallback_name() {
        let state = BadgeState::from_status(HealthStatus::down());
        assert_eq!(state.service(), Some(FALLBACK_SERVICE_NAME));
        assert_eq!(BadgeState::default().label(), "Checking...");
        assert_eq!(BadgeState::default().service(), None);
    }
}
