use super::*;

#[test]
fn class_names_roundtrip() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::from_class_name(kind.class_name()), Some(kind));
        assert_eq!(kind.category(), "nilor-nodes");
    }
    assert_eq!(NodeKind::from_class_name("My First Node"), None);
}

#[test]
fn only_the_mask_node_outputs_a_list() {
    assert!(NodeKind::IntToListOfBools.output_is_list());
    assert!(!NodeKind::Floats.output_is_list());
    assert!(!NodeKind::BoolFromListOfBools.output_is_list());
}

#[test]
fn floats_node_runs_the_generator() {
    let out = invoke_json(
        r#"{"node":"floats","number_of_frames":10,"number_of_images":3,"image_number":1}"#,
    )
    .unwrap();
    let floats = out["floats"].as_array().unwrap();
    assert_eq!(floats.len(), 10);
    assert_eq!(floats[0].as_f64(), Some(1.0));
    assert_eq!(floats[9].as_f64(), Some(0.0));
}

#[test]
fn mask_node_defaults_to_ten_slots() {
    let out = invoke(&NodeInvocation::IntToListOfBools {
        number_of_images: 2,
        max_images: DEFAULT_MASK_CAPACITY,
    })
    .unwrap();
    let NodeOutput::Booleans(bits) = out else {
        panic!("expected booleans");
    };
    assert_eq!(bits.len(), 10);
    assert_eq!(bits.iter().filter(|&&b| b).count(), 2);

    let inv: NodeInvocation =
        serde_json::from_str(r#"{"node":"int_to_list_of_bools","number_of_images":4}"#).unwrap();
    assert_eq!(
        inv,
        NodeInvocation::IntToListOfBools {
            number_of_images: 4,
            max_images: 10
        }
    );
}

#[test]
fn index_may_arrive_as_a_list() {
    let out = invoke_json(
        r#"{"node":"bool_from_list_of_bools","booleans":[true,false,true],"index":[2,0]}"#,
    )
    .unwrap();
    assert_eq!(out, serde_json::json!({ "boolean": true }));

    let out = invoke_json(
        r#"{"node":"bool_from_list_of_bools","booleans":[true,false],"index":1}"#,
    )
    .unwrap();
    assert_eq!(out, serde_json::json!({ "boolean": false }));
}

#[test]
fn errors_propagate_from_the_core() {
    let err = invoke_json(
        r#"{"node":"bool_from_list_of_bools","booleans":[true],"index":3}"#,
    )
    .unwrap_err();
    assert!(matches!(err, CrossfadeError::IndexOutOfRange { index: 3, len: 1 }));

    let err = invoke_json(r#"{"node":"bool_from_list_of_bools","booleans":[true],"index":[]}"#)
        .unwrap_err();
    assert!(matches!(err, CrossfadeError::Contract(_)));

    let err = invoke_json(
        r#"{"node":"floats","number_of_frames":10,"number_of_images":1,"image_number":1}"#,
    )
    .unwrap_err();
    assert!(matches!(err, CrossfadeError::Contract(_)));

    let err = invoke_json(r#"{"node":"nope"}"#).unwrap_err();
    assert!(matches!(err, CrossfadeError::Serde(_)));
}
