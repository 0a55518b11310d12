//! Handicap stone placement.

use crate::point::Point;

/// Returns the maximum number of handicap stones for a given board size.
pub fn max_handicap(rows: u8, cols: u8) -> u8 {
    if rows != cols || cols < 7 || cols.is_multiple_of(2) {
        return 0;
    }
    if cols >= 13 {
        9
    } else {
        // Boards smaller than 13: only corners + center (no side hoshi)
        5
    }
}

/// Hoshi-based handicap stone placement for any odd square board ≥ 7.
///
/// Returns `None` if the board is non-square, even, too small, or count is invalid.
pub fn handicap_points(rows: u8, cols: u8, count: u8) -> Option<Vec<Point>> {
    if count < 2 || count > max_handicap(rows, cols) {
        return None;
    }

    // Hoshi line from the edge: 4th line on boards ≥ 13, 3rd line below that
    let size = cols as i16;
    let near = if size >= 13 { 4 } else { 3 };
    let far = size + 1 - near;
    let mid = (size + 1) / 2;

    let top_left = Point::new(near, near);
    let top_right = Point::new(near, far);
    let bottom_left = Point::new(far, near);
    let bottom_right = Point::new(far, far);
    let center = Point::new(mid, mid);

    let mid_left = Point::new(mid, near);
    let mid_right = Point::new(mid, far);
    let top_mid = Point::new(near, mid);
    let bottom_mid = Point::new(far, mid);

    let corners = [top_right, bottom_left, bottom_right, top_left];
    let sides = [mid_left, mid_right];

    let mut pts = corners[..count.min(4) as usize].to_vec();
    match count {
        5 => pts.push(center),
        6 => pts.extend(sides),
        7 => {
            pts.extend(sides);
            pts.push(center);
        }
        8 => {
            pts.extend(sides);
            pts.extend([top_mid, bottom_mid]);
        }
        9 => {
            pts.extend(sides);
            pts.extend([top_mid, bottom_mid, center]);
        }
        _ => {}
    }

    Some(pts)
}
