//! Port layout geometry.
//!
//! Computes housing dimensions and the world-space position of every port
//! pin. Layout is deterministic: it depends only on the module's port list
//! and the dimension constants, never on render state, so hit-testing and
//! wire anchoring always agree.

use wirekit_core::constants::{MIN_PORT_SPACING, PORT_PADDING};
use wirekit_core::{CatalogModule, ModuleInstance, Point, PortSide, Size};

/// Housing dimensions for a module, in world units.
///
/// Starts from the kind's base template and grows the height so the most
/// crowded left/right side keeps at least `MIN_PORT_SPACING` between pins
/// and `PORT_PADDING` at each end.
pub fn component_dimensions(module: &CatalogModule) -> Size {
    let base = module.kind.dimensions();
    let left = side_count(module, PortSide::Left);
    let right = side_count(module, PortSide::Right);
    let crowded = left.max(right);

    let mut height = base.height;
    if crowded > 1 {
        let needed = (crowded - 1) as f64 * MIN_PORT_SPACING + 2.0 * PORT_PADDING;
        height = height.max(needed);
    }
    Size::new(base.width, height)
}

/// Offset of a port pin relative to the housing's top-left corner.
///
/// Ports on one side form a group ordered by their position in the module's
/// port list. A single pin sits at the side midpoint; N pins spread evenly
/// from `PORT_PADDING` to `edge - PORT_PADDING`, so the layout is symmetric
/// under reversal of the group.
pub fn port_offset(module: &CatalogModule, port_id: &str) -> Option<Point> {
    let port = module.ports.iter().find(|p| p.id == port_id)?;
    let dims = component_dimensions(module);

    let group: Vec<&str> = module
        .ports
        .iter()
        .filter(|p| p.side == port.side)
        .map(|p| p.id.as_str())
        .collect();
    let index = group.iter().position(|id| *id == port_id)?;

    let along = |edge: f64| -> f64 {
        if group.len() == 1 {
            edge / 2.0
        } else {
            let span = edge - 2.0 * PORT_PADDING;
            PORT_PADDING + index as f64 * span / (group.len() - 1) as f64
        }
    };

    Some(match port.side {
        PortSide::Left => Point::new(0.0, along(dims.height)),
        PortSide::Right => Point::new(dims.width, along(dims.height)),
        PortSide::Top => Point::new(along(dims.width), 0.0),
        PortSide::Bottom => Point::new(along(dims.width), dims.height),
    })
}

/// World-space position of a port pin.
pub fn port_absolute_position(instance: &ModuleInstance, port_id: &str) -> Option<Point> {
    let offset = port_offset(&instance.module, port_id)?;
    Some(Point::new(
        instance.position.x + offset.x,
        instance.position.y + offset.y,
    ))
}

fn side_count(module: &CatalogModule, side: PortSide) -> usize {
    module.ports.iter().filter(|p| p.side == side).count()
}
