//! Tests for configuration constants.
//!
//! These guard the wire contract with the triangulation worker: the decoder
//! and the worker must agree on the interleaved layout, so the values are
//! pinned here rather than derived.

use crate::constants::*;

#[test]
fn wire_format_stride_covers_all_attributes() {
    assert_eq!(VERTEX_STRIDE, 3 * ATTRIBUTE_COMPONENTS);
}

#[test]
fn wire_format_offsets_are_packed_in_order() {
    assert_eq!(POSITION_OFFSET, 0);
    assert_eq!(NORMAL_OFFSET, POSITION_OFFSET + ATTRIBUTE_COMPONENTS);
    assert_eq!(COLOR_OFFSET, NORMAL_OFFSET + ATTRIBUTE_COMPONENTS);
    assert_eq!(COLOR_OFFSET + ATTRIBUTE_COMPONENTS, VERTEX_STRIDE);
}

#[test]
fn mesh_object_name_is_stable() {
    // The rendering host keys informational UI off this name.
    assert_eq!(MESH_OBJECT_NAME, "step");
}

#[test]
fn status_messages_are_nonempty() {
    for msg in [
        STATUS_UPLOADING,
        STATUS_DOWNLOADING,
        STATUS_TRIANGULATING,
        STATUS_BUILDING_SCENE,
    ] {
        assert!(!msg.is_empty());
    }
}
