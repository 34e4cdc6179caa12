use crate::foundation::core::{Canvas, DataArea, Point};
use crate::foundation::math::cell_noise;
use crate::render::pattern::CellMask;

/// Deterministic decorative sampling over the whole canvas.
///
/// The canvas is tiled with cells of one data module. A cell is a candidate unless its center
/// falls inside the data area grown by `margin` cells. Candidates are kept when the hash of the
/// cell's pixel position is below `density`, so the same inputs always select the same cells.
pub(crate) fn sample(
    canvas: Canvas,
    data: DataArea,
    cell: f64,
    density: f64,
    margin: f64,
) -> CellMask {
    if cell.is_nan() || cell <= 0.0 || density <= 0.0 {
        return CellMask::new(0, 0, Point::ORIGIN, cell.max(0.0));
    }
    let cols = (canvas.width / cell).ceil() as usize;
    let rows = (canvas.height / cell).ceil() as usize;
    let keep_out = data.rect().inflate(margin * cell, margin * cell);

    CellMask::from_fn(rows, cols, Point::ORIGIN, cell, |r, c| {
        let px = c as f64 * cell;
        let py = r as f64 * cell;
        let center = Point::new(px + cell / 2.0, py + cell / 2.0);
        let reserved = center.x >= keep_out.x0
            && center.x <= keep_out.x1
            && center.y >= keep_out.y0
            && center.y <= keep_out.y1;
        !reserved && cell_noise(px.floor() as i32, py.floor() as i32) < density
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/decor.rs"]
mod tests;
