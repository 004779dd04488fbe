// ABOUTME: Text block measurement and composition.
// ABOUTME: A block is a string of '\n'-separated lines with no trailing newline.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Split a block into lines. The empty block has no lines.
fn lines(block: &str) -> Vec<&str> {
    if block.is_empty() {
        Vec::new()
    } else {
        block.split('\n').collect()
    }
}

/// Display width of the widest line, in terminal cells
pub fn block_width(block: &str) -> usize {
    lines(block).iter().map(|l| l.width()).max().unwrap_or(0)
}

/// Number of lines in the block
pub fn block_height(block: &str) -> usize {
    lines(block).len()
}

/// Cut a line down to at most `max_width` cells without splitting a wide char
pub fn truncate(line: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    // Control characters would reach the terminal as escape sequences.
    for c in line.chars().filter(|c| !c.is_control()) {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Truncate or right-pad a line to exactly `width` cells
fn pad_line(line: &str, width: usize) -> String {
    let mut out = truncate(line, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Crop or pad a block to exactly `width` x `height` cells
pub fn fit(block: &str, width: usize, height: usize) -> String {
    let src = lines(block);
    (0..height)
        .map(|row| pad_line(src.get(row).copied().unwrap_or(""), width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Center content within a `width` x `height` area
pub fn place_center(width: usize, height: usize, content: &str) -> String {
    let src = lines(content);
    let top = height.saturating_sub(src.len()) / 2;
    let rows = (0..height).map(|row| {
        let line = row
            .checked_sub(top)
            .and_then(|i| src.get(i).copied())
            .unwrap_or("");
        let line = truncate(line, width);
        let left = (width - line.width()) / 2;
        let mut padded = " ".repeat(left);
        padded.push_str(&line);
        pad_line(&padded, width)
    });
    rows.collect::<Vec<_>>().join("\n")
}

/// Place blocks side by side, aligned to the top.
///
/// Each block keeps its own width; shorter blocks are padded with blank lines.
pub fn join_horizontal(blocks: &[&str]) -> String {
    let columns: Vec<(Vec<&str>, usize)> = blocks
        .iter()
        .map(|b| (lines(b), block_width(b)))
        .filter(|(_, width)| *width > 0)
        .collect();
    let height = columns.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|(l, width)| pad_line(l.get(row).copied().unwrap_or(""), *width))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stack blocks top to bottom, aligned to the left and padded to a common width
pub fn join_vertical(blocks: &[&str]) -> String {
    let width = blocks.iter().map(|b| block_width(b)).max().unwrap_or(0);
    blocks
        .iter()
        .flat_map(|b| lines(b))
        .map(|l| pad_line(l, width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_has_no_size() {
        assert_eq!(block_width(""), 0);
        assert_eq!(block_height(""), 0);
    }

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(block_width("ab\n日本"), 4);
        assert_eq!(truncate("日本語", 5), "日本");
    }

    #[test]
    fn control_characters_are_dropped() {
        assert_eq!(truncate("a\x1b[31mb\x07", 10), "a[31mb");
        assert_eq!(truncate("\x1b\x1b\x1bxy", 1), "x");
        assert_eq!(block_width(&fit("\x1b[2Jab", 3, 1)), 3);
    }

    #[test]
    fn fit_pads_and_crops() {
        assert_eq!(fit("abc\ndefgh", 4, 3), "abc \ndefg\n    ");
        assert_eq!(fit("anything", 3, 0), "");
    }

    #[test]
    fn place_center_centers_both_ways() {
        assert_eq!(place_center(5, 3, "x"), "     \n  x  \n     ");
    }

    #[test]
    fn place_center_crops_oversized_content() {
        assert_eq!(place_center(2, 1, "abcdef\nghi"), "ab");
    }

    #[test]
    fn join_horizontal_pads_short_blocks() {
        let joined = join_horizontal(&["ab\ncd\nef", "X"]);
        assert_eq!(joined, "abX\ncd \nef ");
    }

    #[test]
    fn join_horizontal_skips_empty_blocks() {
        assert_eq!(join_horizontal(&["", "ab", ""]), "ab");
    }

    #[test]
    fn join_vertical_pads_to_widest() {
        assert_eq!(join_vertical(&["abc", "d", ""]), "abc\nd  ");
    }
}
