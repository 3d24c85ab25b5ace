//! Unit tests for er-core primitives.

#[cfg(test)]
mod ids {
    use crate::BlockId;

    #[test]
    fn ordering_follows_creation_time() {
        assert!(BlockId(1_700_000_000_000) < BlockId(1_700_000_000_001));
        assert_eq!(BlockId(5).successor(), Some(BlockId(6)));
    }

    #[test]
    fn no_successor_past_max() {
        assert_eq!(BlockId(u64::MAX).successor(), None);
        assert_eq!(BlockId(u64::MAX - 1).successor(), Some(BlockId(u64::MAX)));
    }

    #[test]
    fn display() {
        assert_eq!(BlockId(7).to_string(), "BlockId(7)");
        assert_eq!(u64::from(BlockId(7)), 7);
    }
}

#[cfg(test)]
mod geo {
    use crate::{CoreError, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(26.85, 80.95);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km
        let a = GeoPoint::new(26.0, 80.95);
        let b = GeoPoint::new(27.0, 80.95);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.05, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(26.85, 80.95);
        let b = GeoPoint::new(26.90, 81.00);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }

    #[test]
    fn bbox_check_is_inclusive_per_axis() {
        let center = GeoPoint::new(26.85, 80.95);
        assert!(GeoPoint::new(26.8504, 80.9496).within_bbox(center, 0.0005));
        // Close on latitude but not on longitude.
        assert!(!GeoPoint::new(26.85, 80.951).within_bbox(center, 0.0005));
        assert!(!GeoPoint::new(26.851, 80.95).within_bbox(center, 0.0005));
    }

    #[test]
    fn degree_distance_is_hypot() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.degree_distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_and_midpoint() {
        let a = GeoPoint::new(26.85, 80.95);
        let b = GeoPoint::new(26.90, 81.00);
        assert_eq!(a.lerp(b, 0.0), a);
        let m = a.midpoint(b);
        let l = a.lerp(b, 0.5);
        assert!((m.lat - l.lat).abs() < 1e-12);
        assert!((m.lng - l.lng).abs() < 1e-12);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert!(matches!(
            GeoPoint::try_new(90.5, 0.0),
            Err(CoreError::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::try_new(0.0, -180.01).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(26.85, 80.95).to_string(), "(26.850000, 80.950000)");
    }
}

#[cfg(test)]
mod priority {
    use crate::PriorityClass;

    #[test]
    fn curvature_decreases_with_urgency() {
        let low = PriorityClass::Low.curvature_deg();
        let medium = PriorityClass::Medium.curvature_deg();
        let high = PriorityClass::High.curvature_deg();
        assert!(low > medium && medium > high);
        assert_eq!(high, 0.001);
        assert_eq!(medium, 0.002);
        assert_eq!(low, 0.003);
    }

    #[test]
    fn eta_factors() {
        assert_eq!(PriorityClass::High.eta_factor(), 0.7);
        assert_eq!(PriorityClass::Medium.eta_factor(), 0.85);
        assert_eq!(PriorityClass::Low.eta_factor(), 1.0);
    }

    #[test]
    fn default_is_high() {
        assert_eq!(PriorityClass::default(), PriorityClass::High);
    }

    #[test]
    fn parse_and_display() {
        for p in PriorityClass::ALL {
            assert_eq!(p.to_string().parse::<PriorityClass>().unwrap(), p);
        }
        assert_eq!(" HIGH ".parse::<PriorityClass>().unwrap(), PriorityClass::High);
        assert!("urgent".parse::<PriorityClass>().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::{Rng, RngCore};

    use crate::DetourRng;

    fn draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        rng.gen_range(0.002..0.003)
    }

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = DetourRng::new(12345);
        let mut r2 = DetourRng::new(12345);
        for _ in 0..100 {
            assert_eq!(draw(&mut r1), draw(&mut r2));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = DetourRng::new(1);
        let mut b = DetourRng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = DetourRng::new(0);
        for _ in 0..1000 {
            let v = draw(&mut rng);
            assert!((0.002..0.003).contains(&v));
        }
    }

    #[test]
    fn entropy_seeded_generators_differ() {
        let mut a = DetourRng::from_entropy();
        let mut b = DetourRng::from_entropy();
        let xs: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
        assert!((0.002..0.003).contains(&draw(&mut a)));
    }

    #[test]
    fn usable_as_dyn_rng() {
        let mut rng = DetourRng::new(9);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        let v = draw(dyn_rng);
        assert!((0.002..0.003).contains(&v));
    }
}
