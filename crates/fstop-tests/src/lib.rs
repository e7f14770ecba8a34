//! Integration tests for FSTOP-RS crates.
//!
//! This crate contains end-to-end tests that drive the widget the way a UI
//! layer would: messages in, chart series and preview bitmaps out.

#[cfg(test)]
mod tests {
    use fstop_chart::{ChartMsg, ChartState};
    use fstop_core::Image;
    use fstop_optics::{
        compute_samples, resolve_aperture, slider_position, CropFactor, CANONICAL_STOPS,
    };
    use fstop_ops::apply_exposure;

    /// A 4x4 test card with midtones, a clipped-dark and a clipped-bright
    /// corner.
    fn test_card() -> Image {
        let mut img = Image::filled(4, 4, [90, 120, 60, 255]);
        img.set_pixel(0, 0, [2, 2, 2, 255]);
        img.set_pixel(3, 3, [250, 250, 250, 128]);
        img
    }

    /// Chart scenario from the widget's defaults: reference f/2.8, no crop.
    #[test]
    fn test_reference_table_at_f2_8() {
        let series = ChartState::default().series();

        let at = |label: &str| {
            series
                .points
                .iter()
                .find(|p| p.label == label)
                .unwrap_or_else(|| panic!("missing {label}"))
        };

        assert_eq!(at("f/2.8").brightness, 1.0);
        assert_eq!(at("f/1.4").brightness, 4.0);
        assert_eq!(at("f/5.6").brightness, 0.25);
        // Two stops past the reference in each direction.
        assert_eq!(at("f/1.4").brightness / at("f/2.8").brightness, 4.0);
    }

    #[test]
    fn test_crop_scenario_aps_c() {
        let state = ChartState::default()
            .update(ChartMsg::SetCropEnabled(true))
            .update(ChartMsg::SetCropFactor(CropFactor::ApsC));
        let series = state.series();

        let at_ref = series.points.iter().find(|p| p.aperture == 2.8).unwrap();
        assert_eq!(at_ref.effective_label.as_deref(), Some("f/4.2"));
        assert_eq!(at_ref.effective_brightness, Some(0.444));
    }

    #[test]
    fn test_snap_roundtrip_all_canonical_stops() {
        for &stop in &CANONICAL_STOPS {
            assert_eq!(resolve_aperture(slider_position(stop)), stop);
        }
    }

    #[test]
    fn test_snap_scenarios() {
        // Within 2% of f/2.0: snaps.
        assert_eq!(resolve_aperture(slider_position(2.03)), 2.0);
        // 2.5 is outside every window: kept as-is.
        assert_eq!(resolve_aperture(slider_position(2.5)), 2.5);
    }

    #[test]
    fn test_crop_factors_scale_brightness() {
        for cf in [CropFactor::ApsC, CropFactor::ApsCCanon, CropFactor::MicroFourThirds] {
            let c = cf.factor();
            let set = compute_samples(2.8, Some(cf));
            for s in &set.samples {
                let expected = s.normalized / (c * c);
                assert!((s.effective.unwrap() - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_exposure_roundtrip_skips_clipped_pixels() {
        let src = test_card();
        let there = apply_exposure(&src, 2.0);
        let back = apply_exposure(&there, -2.0);

        for ((orig, fwd), rt) in src
            .data()
            .iter()
            .zip(there.data().iter())
            .zip(back.data().iter())
        {
            // Clipped channels are lossy; everything else returns within
            // a rounding step.
            if *fwd == 0 || *fwd == 255 {
                continue;
            }
            assert!((*orig as i32 - *rt as i32).abs() <= 1, "{} vs {}", orig, rt);
        }
    }

    /// Full interaction flow: load, adjust, readjust, clear.
    #[test]
    fn test_widget_flow_end_to_end() {
        let state = ChartState::default()
            .update(ChartMsg::SetSliderPosition(150.0)) // f/2.8
            .update(ChartMsg::ImageLoaded(test_card()));

        // Loading seeded a positive EV (the card averages below mid-gray).
        assert!(state.ev > 0.0);
        let seeded = state.preview().unwrap();
        assert_eq!(seeded.dimensions(), (4, 4));

        // User pulls exposure down, then all the way back up.
        let adjusted = state
            .update(ChartMsg::SetExposure(-1.0))
            .update(ChartMsg::SetExposure(state.ev));

        // Re-adjustment restarted from the source: same result as the
        // original seeded preview, no compounding.
        assert_eq!(adjusted.preview().unwrap().data(), seeded.data());

        // Alpha survives every remap.
        assert_eq!(adjusted.preview().unwrap().pixel(3, 3)[3], 128);

        let cleared = adjusted.update(ChartMsg::ClearImage);
        assert!(cleared.preview().is_none());

        // The chart half is untouched by image edits.
        assert_eq!(cleared.series().points.len(), CANONICAL_STOPS.len());
        assert_eq!(cleared.reference, 2.8);
    }

    #[test]
    fn test_series_descending_with_bounds() {
        let series = ChartState::default().series();
        for pair in series.points.windows(2) {
            assert!(pair[0].aperture > pair[1].aperture);
        }
        let (lo, hi) = series.y_range;
        assert!(lo >= 0.0);
        for p in &series.points {
            assert!(p.brightness >= lo && p.brightness <= hi);
        }
    }
}
