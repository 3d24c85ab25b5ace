//! Fluent builder for constructing a [`Session`].

use er_core::PriorityClass;
use er_route::RouteProvider;

use crate::{BlockedRoads, DispatchConfig, DispatchResult, Session};

/// Fluent builder for [`Session<P>`].
///
/// # Required inputs
///
/// - `P: RouteProvider`: where real routes come from
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                     |
/// |-------------------|-----------------------------|
/// | `.config(c)`      | `DispatchConfig::default()` |
/// | `.priority(p)`    | `PriorityClass::High`       |
/// | `.blocked(b)`     | empty `BlockedRoads`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(StraightLineProvider::default())
///     .config(config)
///     .priority(PriorityClass::Medium)
///     .build()?;
/// ```
pub struct SessionBuilder<P: RouteProvider> {
    provider: P,
    config:   Option<DispatchConfig>,
    priority: PriorityClass,
    blocked:  Option<BlockedRoads>,
}

impl<P: RouteProvider> SessionBuilder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config:   None,
            priority: PriorityClass::default(),
            blocked:  None,
        }
    }

    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn priority(mut self, priority: PriorityClass) -> Self {
        self.priority = priority;
        self
    }

    /// Start with an existing set of blocked points, e.g. carried over from a
    /// previous session.
    pub fn blocked(mut self, blocked: BlockedRoads) -> Self {
        self.blocked = Some(blocked);
        self
    }

    /// Validate the configuration and return a ready [`Session`].
    pub fn build(self) -> DispatchResult<Session<P>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(Session::from_parts(
            config,
            self.provider,
            self.priority,
            self.blocked.unwrap_or_default(),
        ))
    }
}
