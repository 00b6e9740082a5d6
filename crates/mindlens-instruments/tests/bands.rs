use mindlens_instruments::instruments::gad7::Gad7;
use mindlens_instruments::instruments::phq9::Phq9;
use mindlens_instruments::scoring::Severity;
use mindlens_instruments::ScreenerInstrument;

fn assert_partition(instrument: &dyn ScreenerInstrument) {
    for total in 0..=instrument.max_total() {
        let covering = instrument
            .bands()
            .iter()
            .filter(|b| b.contains(total))
            .count();
        assert_eq!(
            covering, 1,
            "{} total {} covered by {} bands",
            instrument.name(),
            total,
            covering
        );
    }
}

#[test]
fn phq9_bands_partition_the_total_range() {
    assert_partition(&Phq9);
}

#[test]
fn gad7_bands_partition_the_total_range() {
    assert_partition(&Gad7);
}

#[test]
fn phq9_boundary_totals_classify_correctly() {
    let cases = [
        (0, Severity::Minimal),
        (4, Severity::Minimal),
        (5, Severity::Mild),
        (9, Severity::Mild),
        (10, Severity::Moderate),
        (14, Severity::Moderate),
        (15, Severity::ModeratelySevereToSevere),
        (27, Severity::ModeratelySevereToSevere),
    ];
    for (total, expected) in cases {
        let band = Phq9.band_for(total).unwrap();
        assert_eq!(band.severity, expected, "total {total}");
    }
}

#[test]
fn gad7_top_band_is_labeled_severe() {
    let band = Gad7.band_for(15).unwrap();
    assert_eq!(band.severity, Severity::ModeratelySevereToSevere);
    assert_eq!(band.label, "Severe");
    assert_eq!(band.max, 21);
}

#[test]
fn max_totals_match_item_counts() {
    assert_eq!(Phq9.max_total(), 27);
    assert_eq!(Gad7.max_total(), 21);
}

#[test]
fn every_band_carries_display_copy() {
    for instrument in mindlens_instruments::all_instruments() {
        for band in instrument.bands() {
            assert!(!band.label.is_empty());
            assert!(!band.guidance.is_empty());
        }
    }
}

#[test]
fn band_lookup_beyond_the_range_is_none() {
    assert!(Phq9.band_for(28).is_none());
    assert!(Gad7.band_for(22).is_none());
}
