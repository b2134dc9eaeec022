//! Edit modes.
//!
//! Edit modes reshape features that already exist in the collection. A drag
//! starts on a handle or on a feature body and is driven until drag stop;
//! locked features are never touched.
//!
//! Hosts report picks for everything under the pointer, including labels and
//! other non-geometry objects. Modes keep only the picks that carry a target
//! before reading handles from them.

mod modify;
mod resize_circle;
mod resize_rectangle;
mod scale;

pub use modify::ModifyMode;
pub use resize_circle::{ActiveSubMode, ResizeCircleMode};
pub use resize_rectangle::ResizeRectangleMode;
pub use scale::ScaleMode;

use crate::geodesy::midpoint;
use crate::model::{Feature, FeatureCollection, Geometry, Position};

use super::events::{EditHandle, HandleType, Pick};

/// A handle to render, and whether the pointer is over it.
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub handle: EditHandle,
    pub hovered: bool,
}

/// Keep only picks that point at geometry.
pub fn geometry_picks(picks: &[Pick]) -> Vec<Pick> {
    picks.iter().filter(|p| p.target.is_some()).cloned().collect()
}

/// First handle of one of `types` among the picks.
pub(crate) fn picked_handle<'p>(picks: &'p [Pick], types: &[HandleType]) -> Option<&'p EditHandle> {
    picks
        .iter()
        .filter_map(Pick::edit_handle)
        .find(|h| types.contains(&h.handle_type))
}

/// The feature at `index`, unless it is missing or locked.
pub(crate) fn editable_feature(data: &FeatureCollection, index: usize) -> Option<&Feature> {
    let feature = data.get(index)?;
    if feature.is_locked() {
        tracing::debug!("feature {} is locked, edit refused", index);
        return None;
    }
    Some(feature)
}

fn is_hovered(handle: &EditHandle, hovered: &[Pick]) -> bool {
    hovered.iter().filter_map(Pick::edit_handle).any(|h| {
        h.feature_index == handle.feature_index
            && h.handle_type == handle.handle_type
            && h.position_indexes == handle.position_indexes
    })
}

fn ring_handles(
    feature_index: usize,
    prefix: &[usize],
    points: &[Position],
    closed: bool,
) -> Vec<EditHandle> {
    let vertex_count = if closed { points.len().saturating_sub(1) } else { points.len() };
    let mut handles = Vec::with_capacity(vertex_count * 2);
    for i in 0..vertex_count {
        let mut indexes = prefix.to_vec();
        indexes.push(i);
        handles.push(EditHandle {
            position: points[i],
            feature_index,
            position_indexes: indexes,
            handle_type: HandleType::Existing,
        });
    }
    for i in 0..points.len().saturating_sub(1) {
        let mut indexes = prefix.to_vec();
        indexes.push(i + 1);
        handles.push(EditHandle {
            position: midpoint(points[i], points[i + 1]),
            feature_index,
            position_indexes: indexes,
            handle_type: HandleType::Intermediate,
        });
    }
    handles
}

/// Vertex and edge-midpoint handles for the selected, unlocked features.
pub fn vertex_guides(data: &FeatureCollection, selected: &[usize], hovered: &[Pick]) -> Vec<Guide> {
    let mut guides = Vec::new();
    for &index in selected {
        let Some(feature) = data.get(index).filter(|f| !f.is_locked()) else {
            continue;
        };
        let handles = match &feature.geometry {
            Geometry::Point(p) => vec![EditHandle {
                position: *p,
                feature_index: index,
                position_indexes: Vec::new(),
                handle_type: HandleType::Existing,
            }],
            Geometry::LineString(line) => ring_handles(index, &[], line, false),
            Geometry::Polygon(rings) => rings
                .iter()
                .enumerate()
                .flat_map(|(r, ring)| ring_handles(index, &[r], ring, true))
                .collect(),
        };
        guides.extend(handles.into_iter().map(|handle| Guide {
            hovered: is_hovered(&handle, hovered),
            handle,
        }));
    }
    guides
}

/// Bounding-box corner handles for the selected, unlocked polygons.
pub fn scale_guides(data: &FeatureCollection, selected: &[usize], hovered: &[Pick]) -> Vec<Guide> {
    let mut guides = Vec::new();
    for &index in selected {
        let Some(feature) = data.get(index).filter(|f| !f.is_locked()) else {
            continue;
        };
        if !matches!(feature.geometry, Geometry::Polygon(_)) {
            continue;
        }
        let Some(bbox) = feature.geometry.bounding_box() else {
            continue;
        };
        for (corner, position) in bbox.corners().into_iter().enumerate() {
            let handle = EditHandle {
                position,
                feature_index: index,
                position_indexes: vec![corner],
                handle_type: HandleType::Scale,
            };
            guides.push(Guide {
                hovered: is_hovered(&handle, hovered),
                handle,
            });
        }
    }
    guides
}
