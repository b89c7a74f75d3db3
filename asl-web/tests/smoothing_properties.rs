use std::collections::BTreeMap;

use asl_web::classifier::RawPrediction;
use asl_web::config::DEFAULT_WINDOW_SIZE;
use asl_web::smoothing::{SmoothingAggregator, StabilizedPrediction};
use asl_web::{Translator, TranslatorConfig};

fn p(label: &str, confidence: f32) -> RawPrediction {
    RawPrediction::new(label, confidence).unwrap()
}

/// Small deterministic generator so the sequences vary without a rand dep
fn pseudo_random_stream(seed: u32, len: usize) -> Vec<RawPrediction> {
    let labels = ["A", "B", "C", "E", "S"];
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let label = labels[(state >> 24) as usize % labels.len()];
            let confidence = (state & 0xffff) as f32 / 65_535.0;
            p(label, confidence)
        })
        .collect()
}

#[test]
fn window_bound_holds_for_long_streams() {
    for seed in 1..20 {
        let mut aggregator = SmoothingAggregator::new(DEFAULT_WINDOW_SIZE);
        for prediction in pseudo_random_stream(seed, 200) {
            aggregator.ingest(prediction);
            assert!(aggregator.len() <= DEFAULT_WINDOW_SIZE);
        }
    }
}

#[test]
fn stabilized_output_depends_only_on_window_contents() {
    // Same multiset in the last 10 entries, different history before that
    let tail = pseudo_random_stream(7, 10);
    let mut rotated = tail.clone();
    rotated.rotate_left(3);

    let mut a = SmoothingAggregator::default();
    for prediction in pseudo_random_stream(99, 30).into_iter().chain(tail) {
        a.ingest(prediction);
    }
    let mut b = SmoothingAggregator::default();
    for prediction in rotated {
        b.ingest(prediction);
    }

    assert_eq!(a.current_stabilized(), b.current_stabilized());
}

#[test]
fn output_is_mean_of_winning_label() {
    let mut aggregator = SmoothingAggregator::default();
    for prediction in pseudo_random_stream(3, 25) {
        let out = aggregator.ingest(prediction);
        let mut groups: BTreeMap<&str, (f32, usize)> = BTreeMap::new();
        for entry in aggregator.history().iter() {
            let group = groups.entry(entry.label()).or_insert((0.0, 0));
            group.0 += entry.confidence();
            group.1 += 1;
        }
        let means: BTreeMap<&str, f32> = groups
            .into_iter()
            .map(|(label, (sum, count))| (label, sum / count as f32))
            .collect();

        assert!((out.confidence - means[out.label.as_str()]).abs() < 1e-5);
        for (label, mean) in &means {
            assert!(
                *mean <= out.confidence + 1e-5,
                "{} has mean {} above winner {} at {}",
                label,
                mean,
                out.label,
                out.confidence
            );
        }
    }
}

#[test]
fn reset_always_yields_empty() {
    for seed in 1..5 {
        let mut aggregator = SmoothingAggregator::default();
        for prediction in pseudo_random_stream(seed, seed as usize * 7) {
            aggregator.ingest(prediction);
        }
        aggregator.reset();
        assert_eq!(aggregator.current_stabilized(), StabilizedPrediction::empty());
    }
}

#[test]
fn smaller_window_reacts_faster() {
    let config = TranslatorConfig::new(3).unwrap();
    let mut fast = Translator::new(&config);
    let mut slow = Translator::default();
    for translator in [&mut fast, &mut slow] {
        translator.set_model_ready();
        translator.start().unwrap();
        for _ in 0..10 {
            translator.submit(p("A", 0.9));
        }
        for _ in 0..3 {
            translator.submit(p("B", 0.85));
        }
    }

    assert_eq!(fast.aggregator().len(), 3);
    assert_eq!(fast.displayed().label, "B");
    // A's mean (0.9) is still above B's (0.85) in the default window
    assert_eq!(slow.displayed().label, "A");
}
