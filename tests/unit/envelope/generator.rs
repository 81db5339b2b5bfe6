use super::*;

fn approx(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
}

#[test]
fn middle_image_of_three_over_ten_frames() {
    let env = generate(10, 3, 2).unwrap();
    let third = 1.0 / 3.0;
    let want = [
        0.0,
        third,
        2.0 * third,
        1.0,
        1.0,
        2.0 * third,
        third,
        0.0,
        0.0,
        0.0,
    ];
    assert!(approx(env.as_slice(), &want), "{:?}", env.weights);
}

#[test]
fn first_image_falls_then_stays_zero() {
    let env = generate(10, 3, 1).unwrap();
    let w = env.as_slice();
    assert_eq!(w[0], 1.0);
    assert_eq!(w[3], 0.0);
    assert!(w.windows(2).all(|p| p[1] <= p[0]));
    assert!(w[4..].iter().all(|&x| x == 0.0));
}

#[test]
fn last_image_truncates_trailing_frames() {
    let env = generate(10, 3, 3).unwrap();
    let w = env.as_slice();
    assert_eq!(env.len(), 10);
    assert!(w[..4].iter().all(|&x| x == 0.0));
    assert_eq!(w[4], 0.0);
    assert_eq!(w[7], 1.0);
    assert_eq!(&w[8..], &[0.0, 0.0]);
}

#[test]
fn anchor_end_places_last_portion_on_final_frame() {
    let req = EnvelopeRequest::new(10, 3, 3);
    let env = generate_with(
        &req,
        EnvelopeOptions {
            tail: TailMode::AnchorEnd,
        },
    )
    .unwrap();
    let w = env.as_slice();
    assert_eq!(w[9], 1.0);
    assert_eq!(w[6], 0.0);
    assert!(w[..6].iter().all(|&x| x == 0.0));

    // Only the last image moves.
    let opts = EnvelopeOptions {
        tail: TailMode::AnchorEnd,
    };
    assert_eq!(
        generate_with(&EnvelopeRequest::new(10, 3, 2), opts).unwrap(),
        generate(10, 3, 2).unwrap()
    );
}

#[test]
fn final_frame_stays_zero_even_when_divisible() {
    // (13 - 1) / (4 - 1) = 4 exactly, yet the last rise ends one frame early.
    let env = generate(13, 4, 4).unwrap();
    assert_eq!(env.as_slice()[12], 0.0);
    assert_eq!(env.as_slice()[11], 1.0);
    assert_eq!(env.support().unwrap().start, FrameIndex(9));
}

#[test]
fn middle_peak_sits_at_portion_boundary() {
    let req = EnvelopeRequest::new(25, 5, 3);
    let p = req.portion_length();
    assert_eq!(p, 6);
    let env = generate_with(&req, EnvelopeOptions::default()).unwrap();
    let start = req.window(EnvelopeOptions::default()).start.0;
    assert_eq!(start, 6);
    let w = env.as_slice();
    assert_eq!(w[start], 0.0);
    assert_eq!(w[start + p - 1], 1.0);
    assert_eq!(w[start + p], 1.0);
    assert_eq!(w[start + 2 * p - 1], 0.0);
    assert_eq!(env.peak(), 1.0);
}

#[test]
fn role_prefers_first_branch() {
    assert_eq!(EnvelopeRequest::new(10, 2, 1).role(), ImageRole::First);
    assert_eq!(EnvelopeRequest::new(10, 2, 2).role(), ImageRole::Last);
    assert_eq!(EnvelopeRequest::new(10, 4, 3).role(), ImageRole::Middle);
}

#[test]
fn portions_shorter_than_two_frames_are_rejected() {
    // portion_length = 0 and 1: neither holds both ramp anchors.
    for (f, n) in [(1, 2), (2, 2), (3, 5), (3, 3), (6, 4)] {
        for i in 1..=n {
            let err = generate(f, n, i).unwrap_err();
            assert!(matches!(err, CrossfadeError::Contract(_)), "{f} {n} {i}");
        }
    }
}

#[test]
fn shortest_valid_timeline_hits_both_anchors() {
    // (5 - 1) / (3 - 1) = 2 = MIN_PORTION_LENGTH.
    assert_eq!(generate(5, 3, 1).unwrap().as_slice(), &[1.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(generate(5, 3, 2).unwrap().as_slice(), &[0.0, 1.0, 1.0, 0.0, 0.0]);
    assert_eq!(generate(5, 3, 3).unwrap().as_slice(), &[0.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn support_spans_nonzero_weights() {
    let env = generate(10, 3, 2).unwrap();
    assert_eq!(env.support(), Some(FrameRange::span(1, 6)));
    assert!(Envelope::zeros(4).support().is_none());
}

#[test]
fn contract_violations_fail_fast() {
    for (f, n, i) in [(0, 3, 1), (10, 1, 1), (10, 0, 1), (10, 3, 0), (10, 3, 4)] {
        let err = generate(f, n, i).unwrap_err();
        assert!(matches!(err, CrossfadeError::Contract(_)), "{f} {n} {i}");
    }
}

#[test]
fn envelope_options_deserialize_with_defaults() {
    let o: EnvelopeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(o.tail, DEFAULT_TAIL_MODE);
    let o: EnvelopeOptions = serde_json::from_str(r#"{"tail":"anchor_end"}"#).unwrap();
    assert_eq!(o.tail, TailMode::AnchorEnd);
}

#[test]
fn portion_length_is_zero_without_a_second_image() {
    assert_eq!(portion_length(10, 1), 0);
    assert_eq!(portion_length(10, 0), 0);
    assert_eq!(portion_length(10, 3), 4);
    assert_eq!(portion_length(1, 2), 0);
}
