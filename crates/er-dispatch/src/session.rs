//! The `Session` struct: one user's in-memory planning state.

use rand::Rng;

use er_core::{BlockId, GeoPoint, PriorityClass};
use er_route::{RouteProvider, first_blocking, synthesize_detour};

use crate::{
    Algorithm, BlockedRoads, DispatchConfig, DispatchError, DispatchResult, NoopObserver,
    RoutePlan, SessionObserver, TrafficReport,
};

/// Planning state for one map session.
///
/// Holds the endpoints, priority, blocked points and the most recent plan.
/// Nothing is persisted; dropping the session discards everything.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<P: RouteProvider> {
    config:   DispatchConfig,
    provider: P,
    priority: PriorityClass,
    start:    Option<GeoPoint>,
    end:      Option<GeoPoint>,
    blocked:  BlockedRoads,

    /// Most recent plan; traffic simulation mutates its ETA.
    plan:    Option<RoutePlan>,
    /// Markers from the last traffic simulation on `plan`.
    traffic: Option<TrafficReport>,

    observer: Box<dyn SessionObserver + Send>,
}

impl<P: RouteProvider> Session<P> {
    pub(crate) fn from_parts(
        config:   DispatchConfig,
        provider: P,
        priority: PriorityClass,
        blocked:  BlockedRoads,
    ) -> Self {
        Self {
            config,
            provider,
            priority,
            start: None,
            end: None,
            blocked,
            plan: None,
            traffic: None,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Replace the configuration.  An invalid config is rejected and the
    /// current one kept.
    pub fn set_config(&mut self, config: DispatchConfig) -> DispatchResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Install an observer, replacing the previous one.
    pub fn set_observer(&mut self, observer: impl SessionObserver + Send + 'static) {
        self.observer = Box::new(observer);
    }

    // ── Endpoints & priority ──────────────────────────────────────────────

    pub fn set_start(&mut self, lat: f64, lng: f64) -> DispatchResult<GeoPoint> {
        let p = GeoPoint::try_new(lat, lng)?;
        self.start = Some(p);
        Ok(p)
    }

    pub fn set_end(&mut self, lat: f64, lng: f64) -> DispatchResult<GeoPoint> {
        let p = GeoPoint::try_new(lat, lng)?;
        self.end = Some(p);
        Ok(p)
    }

    pub fn start(&self) -> Option<GeoPoint> {
        self.start
    }

    pub fn end(&self) -> Option<GeoPoint> {
        self.end
    }

    pub fn set_priority(&mut self, priority: PriorityClass) {
        self.priority = priority;
    }

    pub fn priority(&self) -> PriorityClass {
        self.priority
    }

    /// `true` once both endpoints are set.
    pub fn can_calculate(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    // ── Blocked points ────────────────────────────────────────────────────

    pub fn add_block(&mut self, lat: f64, lng: f64) -> DispatchResult<BlockId> {
        let pos = GeoPoint::try_new(lat, lng)?;
        let id = self.blocked.add(pos)?;
        self.observer.on_blocks_changed(Some(id), self.blocked.len());
        Ok(id)
    }

    /// Remove a blocked point.  Returns `false` if `id` was not live.
    pub fn remove_block(&mut self, id: BlockId) -> bool {
        let removed = self.blocked.remove(id);
        if removed {
            self.observer.on_blocks_changed(None, self.blocked.len());
        }
        removed
    }

    pub fn blocked(&self) -> &BlockedRoads {
        &self.blocked
    }

    /// Drag a blocked point to a new position.  The id is unchanged.
    pub fn move_block(&mut self, id: BlockId, lat: f64, lng: f64) -> DispatchResult<GeoPoint> {
        let pos = GeoPoint::try_new(lat, lng)?;
        if !self.blocked.move_to(id, pos) {
            return Err(DispatchError::UnknownBlock(id));
        }
        self.observer.on_blocks_changed(None, self.blocked.len());
        Ok(pos)
    }

    /// Forget endpoints, the active route, traffic markers and all blocked
    /// points.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.plan = None;
        self.traffic = None;
        self.blocked.clear();
        self.observer.on_cleared();
    }

    // ── Planning ──────────────────────────────────────────────────────────

    pub fn plan(&self) -> Option<&RoutePlan> {
        self.plan.as_ref()
    }

    pub fn traffic(&self) -> Option<&TrafficReport> {
        self.traffic.as_ref()
    }

    /// Fetch a real route and fall back to a synthesized detour when it
    /// passes near a blocked point.
    ///
    /// `rng` only feeds the detour synthesizer.  On error the previous plan is
    /// kept.
    pub fn calculate_route<R>(&mut self, rng: &mut R) -> DispatchResult<&RoutePlan>
    where
        R: Rng + ?Sized,
    {
        let start = self.start.ok_or(DispatchError::MissingEndpoint("start"))?;
        let end = self.end.ok_or(DispatchError::MissingEndpoint("end"))?;

        let route = self.provider.route(start, end).inspect_err(|e| {
            log::warn!("{} failed to route {start} → {end}: {e}", self.provider.name());
        })?;

        let blocked = self.blocked.as_slice();
        let factor = self.priority.eta_factor();

        let plan = match first_blocking(&route.path, blocked, self.config.threshold_deg) {
            Some(hit) => {
                log::info!("route blocked at {}; synthesizing detour", hit.id);
                let path = synthesize_detour(start, end, self.priority, blocked, rng);
                let distance_km = start.distance_km(end) * self.config.detour_distance_factor;
                RoutePlan {
                    path,
                    algorithm: Algorithm::SimulatedDetour,
                    distance_km,
                    eta_minutes: distance_km / self.config.detour_speed_kmh * 60.0 * factor,
                    priority: self.priority,
                    traffic_applied: false,
                }
            }
            None => RoutePlan {
                distance_km: route.distance_km(),
                eta_minutes: route.duration_min() * factor,
                path: route.path,
                algorithm: Algorithm::Provider(self.provider.name().to_owned()),
                priority: self.priority,
                traffic_applied: false,
            },
        };

        log::info!(
            "planned {} route: {:.2} km, {:.1} min ({} priority)",
            plan.algorithm.label(),
            plan.distance_km,
            plan.eta_minutes,
            plan.priority
        );

        self.traffic = None;
        self.observer.on_route_planned(&plan);
        Ok(self.plan.insert(plan))
    }

    /// Place traffic markers along the active route and add a random delay
    /// to its ETA.
    ///
    /// Each segment independently gets a marker at its midpoint with
    /// probability `traffic_probability`.  Markers replace those of any
    /// earlier simulation.  The new ETA is
    /// `round(eta + traffic_delay_min + U[0, 1) × traffic_delay_spread)`.
    pub fn simulate_traffic<R>(&mut self, rng: &mut R) -> DispatchResult<&TrafficReport>
    where
        R: Rng + ?Sized,
    {
        let plan = self.plan.as_mut().ok_or(DispatchError::NoActiveRoute)?;
        let p = self.config.traffic_probability.clamp(0.0, 1.0);

        let markers: Vec<GeoPoint> = plan
            .path
            .windows(2)
            .filter_map(|seg| {
                rng.gen_bool(p).then(|| seg[0].midpoint(seg[1]))
            })
            .collect();

        let delay = self.config.traffic_delay_min
            + rng.r#gen::<f64>() * self.config.traffic_delay_spread;
        let eta_minutes = (plan.eta_minutes + delay).round();

        plan.eta_minutes = eta_minutes;
        plan.traffic_applied = true;

        log::info!("traffic: {} delayed segments, ETA now {eta_minutes} min", markers.len());

        let report = TrafficReport { markers, eta_minutes };
        self.observer.on_traffic(&report);
        Ok(self.traffic.insert(report))
    }
}
