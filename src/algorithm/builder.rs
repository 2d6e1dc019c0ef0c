//! Wiring of the knot grid for each pattern family
//!
//! A family recipe partitions the columns into diagonal sub-ranges and
//! applies a fixed set of operations to each: linking every non-terminal
//! knot to its two exit neighbors, forcing seam columns to the reverse
//! kind, selecting the visible input side, overriding the links where a
//! fold line breaks the generic adjacency rule, and categorizing the
//! last row's exits.

use crate::algorithm::family::{Orientation, PatternFamily, SeamStyle};
use crate::io::error::{PatternError, Result};
use crate::spatial::grid::KnotGrid;
use crate::spatial::knot::{EndKnotKind, KnotIndex, KnotKind, ThreadSide};

/// Wire links, kinds, visibility and end categories for a family
///
/// The grid must already carry its structural flags; dimensions must
/// have passed [`PatternFamily::validate`].
///
/// # Errors
///
/// Returns [`PatternError::KnotOutOfRange`] if a recipe addresses a
/// knot the grid does not contain, which validated dimensions rule out.
pub fn build_family(grid: &mut KnotGrid, family: PatternFamily) -> Result<()> {
    let width = grid.width();
    match family {
        PatternFamily::L => {
            link_range(grid, Orientation::Ascending, 0, width);
            set_visibility(grid, 0, width, ThreadSide::Left);
            set_end_knots(grid, Orientation::Ascending, 0, width - 1)?;
        }
        PatternFamily::R => {
            link_range(grid, Orientation::Descending, 0, width);
            set_visibility(grid, 0, width, ThreadSide::Right);
            set_end_knots(grid, Orientation::Descending, 1, width)?;
        }
        PatternFamily::M => {
            let mid = PatternFamily::middle_column(width);
            link_range(grid, Orientation::Ascending, 0, mid);
            link_range(grid, Orientation::Descending, mid + 1, width);
            set_kind_column(grid, mid, KnotKind::Reverse);
            set_visibility(grid, mid + 1, width, ThreadSide::Right);
            fix_seam_links(grid, SeamStyle::FoldA, mid);
            set_end_knots(grid, Orientation::Ascending, 0, mid)?;
            set_end_knots(grid, Orientation::Descending, mid + 1, width)?;
        }
        PatternFamily::A => {
            let mid = PatternFamily::middle_column(width);
            link_range(grid, Orientation::Descending, 0, mid);
            link_range(grid, Orientation::Ascending, mid + 1, width);
            set_kind_column(grid, mid, KnotKind::Reverse);
            set_visibility(grid, 0, mid, ThreadSide::Right);
            fix_seam_links(grid, SeamStyle::FoldB, mid);
            set_end_knots(grid, Orientation::Descending, 1, mid + 1)?;
            set_end_knots(grid, Orientation::Ascending, mid, width - 1)?;
            set_end_kind(grid, mid, EndKnotKind::Both)?;
        }
        PatternFamily::W => {
            let span = PatternFamily::quarter_span(width);
            let (x1, x2, x3, x4) = (span, 2 * span, 3 * span, 4 * span);
            link_range(grid, Orientation::Ascending, 0, x1 + 1);
            link_range(grid, Orientation::Descending, x1, x2 + 1);
            link_range(grid, Orientation::Ascending, x2, x3 + 1);
            link_range(grid, Orientation::Descending, x3, x4 + 1);
            set_kind_column(grid, x1, KnotKind::Reverse);
            set_kind_column(grid, x2, KnotKind::Reverse);
            set_kind_column(grid, x3, KnotKind::Reverse);
            set_visibility(grid, 0, x1 + 1, ThreadSide::Left);
            set_visibility(grid, x1, x2 + 1, ThreadSide::Right);
            set_visibility(grid, x2, x3, ThreadSide::Left);
            set_visibility(grid, x3 + 1, x4 + 1, ThreadSide::Right);
            fix_seam_links(grid, SeamStyle::FoldA, x1);
            fix_seam_links(grid, SeamStyle::FoldB, x2);
            fix_seam_links(grid, SeamStyle::FoldA, x3);

            set_end_kind(grid, x1, EndKnotKind::None)?;
            set_end_knots(grid, Orientation::Ascending, 0, x1)?;
            set_end_knots(grid, Orientation::Descending, x1 + 1, x2 + 1)?;
            set_end_knots(grid, Orientation::Ascending, x2, x3)?;
            set_end_kind(grid, x2, EndKnotKind::Both)?;
            set_end_kind(grid, x3, EndKnotKind::None)?;
            set_end_knots(grid, Orientation::Descending, x3 + 1, x4 + 1)?;
        }
    }
    normalize_end_row(grid);
    Ok(())
}

/// Link every non-terminal knot in `[start, stop)` to its exit neighbors
///
/// The target of each exit depends on the range's diagonal flow and on
/// whether the knot touches a grid edge; edge knots return into their
/// own column a row further down.
pub(crate) fn link_range(grid: &mut KnotGrid, orientation: Orientation, start: usize, stop: usize) {
    for y in 0..grid.length() {
        for x in start..stop {
            let Some(knot) = grid.get([x, y]) else {
                continue;
            };
            if knot.is_end_row {
                continue;
            }

            let (to_right, to_left): (KnotIndex, KnotIndex) = match orientation {
                Orientation::Ascending => {
                    if knot.is_edge_left {
                        ([x + 1, y], [x, y + 1])
                    } else if knot.is_edge_right {
                        ([x, y + 1], [x - 1, y + 1])
                    } else {
                        ([x + 1, y], [x - 1, y + 1])
                    }
                }
                Orientation::Descending => {
                    if knot.is_edge_left {
                        ([x + 1, y + 1], [x, y + 1])
                    } else if knot.is_edge_right {
                        ([x, y + 1], [x - 1, y])
                    } else {
                        ([x + 1, y + 1], [x - 1, y])
                    }
                }
            };

            if let Some(knot) = grid.get_mut([x, y]) {
                knot.link_to_right_exit = Some(to_right);
                knot.link_to_left_exit = Some(to_left);
            }
        }
    }
}

/// Force every knot in a column to a fixed kind
pub(crate) fn set_kind_column(grid: &mut KnotGrid, column: usize, kind: KnotKind) {
    for y in 0..grid.length() {
        if let Some(knot) = grid.get_mut([column, y]) {
            knot.kind = kind;
        }
    }
}

/// Select the displayed input side for all knots in `[start, stop)`
pub(crate) fn set_visibility(grid: &mut KnotGrid, start: usize, stop: usize, side: ThreadSide) {
    for y in 0..grid.length() {
        for x in start..stop {
            if let Some(knot) = grid.get_mut([x, y]) {
                knot.left_thread_visible = matches!(side, ThreadSide::Left);
            }
        }
    }
}

/// Override the exit links of a seam column
///
/// The generic adjacency rule does not hold where two differently
/// oriented ranges meet; both fold styles send the exits straight into
/// the neighboring columns, a row down for `FoldA` and level for
/// `FoldB`.
pub(crate) fn fix_seam_links(grid: &mut KnotGrid, style: SeamStyle, column: usize) {
    for y in 0..grid.length() {
        let Some(knot) = grid.get([column, y]) else {
            continue;
        };
        if knot.is_end_row {
            continue;
        }

        let (to_right, to_left): (KnotIndex, KnotIndex) = match style {
            SeamStyle::FoldA => ([column + 1, y + 1], [column - 1, y + 1]),
            SeamStyle::FoldB => ([column + 1, y], [column - 1, y]),
        };

        if let Some(knot) = grid.get_mut([column, y]) {
            knot.link_to_right_exit = Some(to_right);
            knot.link_to_left_exit = Some(to_left);
        }
    }
}

/// Categorize last-row knots in `[start, stop)` and wire their exit
///
/// Ascending ranges keep only the rightward exit (`LikeL`) except at
/// the right edge; every other case keeps only the leftward exit
/// (`LikeR`). Forced `None`/`Both` seam cases are applied on top by
/// the family recipes.
pub(crate) fn set_end_knots(
    grid: &mut KnotGrid,
    orientation: Orientation,
    start: usize,
    stop: usize,
) -> Result<()> {
    let y = grid.length() - 1;
    for x in start..stop {
        let at_right_edge = grid
            .get([x, y])
            .is_some_and(|knot| knot.is_edge_right);
        let knot = grid
            .get_mut([x, y])
            .ok_or(PatternError::KnotOutOfRange { position: [x, y] })?;

        if matches!(orientation, Orientation::Ascending) && !at_right_edge {
            knot.end_kind = Some(EndKnotKind::LikeL);
            knot.link_to_right_exit = Some([x + 1, y]);
        } else {
            knot.end_kind = Some(EndKnotKind::LikeR);
            if let Some(left) = x.checked_sub(1) {
                knot.link_to_left_exit = Some([left, y]);
            }
        }
    }
    Ok(())
}

/// Force the end category of one last-row knot
fn set_end_kind(grid: &mut KnotGrid, column: usize, kind: EndKnotKind) -> Result<()> {
    let y = grid.length() - 1;
    let knot = grid
        .get_mut([column, y])
        .ok_or(PatternError::KnotOutOfRange {
            position: [column, y],
        })?;
    knot.end_kind = Some(kind);
    Ok(())
}

/// Give every uncategorized last-row knot the terminal category
///
/// Family recipes leave edge corners outside their end ranges; those
/// knots have no exits and every thread stops there.
fn normalize_end_row(grid: &mut KnotGrid) {
    let y = grid.length() - 1;
    for x in 0..grid.width() {
        if let Some(knot) = grid.get_mut([x, y])
            && knot.end_kind.is_none()
        {
            knot.end_kind = Some(EndKnotKind::None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(family: PatternFamily, width: usize, length: usize) -> KnotGrid {
        let mut grid = KnotGrid::new(width, length).unwrap();
        build_family(&mut grid, family).unwrap();
        grid
    }

    #[test]
    fn test_ascending_links_follow_edge_rules() {
        let grid = built(PatternFamily::L, 5, 3);

        // interior
        let knot = grid.get([2, 0]).unwrap();
        assert_eq!(knot.link_to_right_exit, Some([3, 0]));
        assert_eq!(knot.link_to_left_exit, Some([1, 1]));

        // left edge returns into its own column
        let knot = grid.get([0, 1]).unwrap();
        assert_eq!(knot.link_to_right_exit, Some([1, 1]));
        assert_eq!(knot.link_to_left_exit, Some([0, 2]));

        // right edge
        let knot = grid.get([4, 0]).unwrap();
        assert_eq!(knot.link_to_right_exit, Some([4, 1]));
        assert_eq!(knot.link_to_left_exit, Some([3, 1]));
    }

    #[test]
    fn test_descending_links_mirror_ascending() {
        let grid = built(PatternFamily::R, 5, 3);

        let knot = grid.get([2, 0]).unwrap();
        assert_eq!(knot.link_to_right_exit, Some([3, 1]));
        assert_eq!(knot.link_to_left_exit, Some([1, 0]));

        let knot = grid.get([0, 0]).unwrap();
        assert_eq!(knot.link_to_right_exit, Some([1, 1]));
        assert_eq!(knot.link_to_left_exit, Some([0, 1]));

        let knot = grid.get([4, 1]).unwrap();
        assert_eq!(knot.link_to_right_exit, Some([4, 2]));
        assert_eq!(knot.link_to_left_exit, Some([3, 1]));
    }

    #[test]
    fn test_m_seam_column_is_reverse_with_fold_a_links() {
        let grid = built(PatternFamily::M, 5, 4);

        for y in 0..4 {
            assert_eq!(grid.get([2, y]).unwrap().kind, KnotKind::Reverse);
        }
        let seam = grid.get([2, 1]).unwrap();
        assert_eq!(seam.link_to_right_exit, Some([3, 2]));
        assert_eq!(seam.link_to_left_exit, Some([1, 2]));

        // right half shows the right thread
        assert!(!grid.get([3, 0]).unwrap().left_thread_visible);
        assert!(grid.get([1, 0]).unwrap().left_thread_visible);
        // seam column keeps the default
        assert!(grid.get([2, 0]).unwrap().left_thread_visible);
    }

    #[test]
    fn test_a_seam_links_stay_level() {
        let grid = built(PatternFamily::A, 5, 4);

        let seam = grid.get([2, 1]).unwrap();
        assert_eq!(seam.link_to_right_exit, Some([3, 1]));
        assert_eq!(seam.link_to_left_exit, Some([1, 1]));
        assert!(!grid.get([0, 2]).unwrap().left_thread_visible);
        assert!(grid.get([3, 2]).unwrap().left_thread_visible);
    }

    #[test]
    fn test_end_row_categories_family_l() {
        let grid = built(PatternFamily::L, 5, 3);

        for x in 0..4 {
            let knot = grid.get([x, 2]).unwrap();
            assert_eq!(knot.end_kind, Some(EndKnotKind::LikeL));
            assert_eq!(knot.link_to_right_exit, Some([x + 1, 2]));
            assert_eq!(knot.link_to_left_exit, None);
        }
        // the right corner is outside the end range and terminates
        let corner = grid.get([4, 2]).unwrap();
        assert_eq!(corner.end_kind, Some(EndKnotKind::None));
        assert_eq!(corner.link_to_right_exit, None);
        assert_eq!(corner.link_to_left_exit, None);
    }

    #[test]
    fn test_end_row_categories_family_a() {
        let grid = built(PatternFamily::A, 5, 4);

        let seam = grid.get([2, 3]).unwrap();
        assert_eq!(seam.end_kind, Some(EndKnotKind::Both));
        assert_eq!(seam.link_to_left_exit, Some([1, 3]));
        assert_eq!(seam.link_to_right_exit, Some([3, 3]));

        assert_eq!(grid.get([1, 3]).unwrap().end_kind, Some(EndKnotKind::LikeR));
        assert_eq!(grid.get([3, 3]).unwrap().end_kind, Some(EndKnotKind::LikeL));
        assert_eq!(grid.get([0, 3]).unwrap().end_kind, Some(EndKnotKind::None));
        assert_eq!(grid.get([4, 3]).unwrap().end_kind, Some(EndKnotKind::None));
    }

    #[test]
    fn test_w_family_seams_and_end_row() {
        let grid = built(PatternFamily::W, 13, 4);
        let (x1, x2, x3) = (3, 6, 9);

        for column in [x1, x2, x3] {
            for y in 0..4 {
                assert_eq!(grid.get([column, y]).unwrap().kind, KnotKind::Reverse);
            }
        }

        // seam fold styles alternate A-style between two M-styles
        let seam = grid.get([x1, 1]).unwrap();
        assert_eq!(seam.link_to_right_exit, Some([x1 + 1, 2]));
        let seam = grid.get([x2, 1]).unwrap();
        assert_eq!(seam.link_to_right_exit, Some([x2 + 1, 1]));
        let seam = grid.get([x3, 1]).unwrap();
        assert_eq!(seam.link_to_left_exit, Some([x3 - 1, 2]));

        assert_eq!(grid.get([x1, 3]).unwrap().end_kind, Some(EndKnotKind::None));
        assert_eq!(grid.get([x2, 3]).unwrap().end_kind, Some(EndKnotKind::Both));
        assert_eq!(grid.get([x3, 3]).unwrap().end_kind, Some(EndKnotKind::None));

        // visibility alternates across the four ranges
        assert!(grid.get([1, 0]).unwrap().left_thread_visible);
        assert!(!grid.get([4, 0]).unwrap().left_thread_visible);
        assert!(grid.get([7, 0]).unwrap().left_thread_visible);
        assert!(!grid.get([11, 0]).unwrap().left_thread_visible);
        // the third seam keeps the default left side
        assert!(grid.get([x3, 0]).unwrap().left_thread_visible);
    }

    #[test]
    fn test_every_non_terminal_knot_is_fully_linked() {
        for (family, width) in [
            (PatternFamily::L, 5),
            (PatternFamily::R, 6),
            (PatternFamily::M, 7),
            (PatternFamily::A, 9),
            (PatternFamily::W, 13),
        ] {
            let grid = built(family, width, 5);
            for (index, knot) in grid.iter() {
                if !knot.is_end_row {
                    assert!(
                        knot.link_to_left_exit.is_some() && knot.link_to_right_exit.is_some(),
                        "family {family} knot {index:?} is missing a link"
                    );
                }
            }
        }
    }
}
