use crate::palette::Palette;
use crate::rows::RowInstruction;

/// Placeholder label for blocks whose color id no longer resolves. A stale
/// id must not abort formatting of the rest of the pattern.
const UNKNOWN_COLOR: &str = "Unknown";

/// Render one instruction as a written pattern line:
/// `Row 3 (RS): Charcoal x4, Pure White x2`.
///
/// Blocks are emitted in stored order, which already reflects the encoder's
/// scan direction.
pub fn format_instruction(instruction: &RowInstruction, palette: &Palette) -> String {
    let parts: Vec<String> = instruction
        .blocks
        .iter()
        .map(|block| {
            let name = palette
                .get(&block.color_id)
                .map(|entry| entry.name.as_str())
                .unwrap_or(UNKNOWN_COLOR);
            format!("{} x{}", name, block.count)
        })
        .collect();

    format!(
        "Row {} ({}): {}",
        instruction.row_num,
        instruction.side,
        parts.join(", ")
    )
}

/// Format a whole instruction list, preserving the given order. Pass
/// [`crate::rows::working_order`] output first for a bottom-up document.
pub fn written_pattern(instructions: &[RowInstruction], palette: &Palette) -> Vec<String> {
    instructions
        .iter()
        .map(|instruction| format_instruction(instruction, palette))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::grid::Grid;
    use crate::rows::{encode_rows, working_order, RowBlock, Side};
    use crate::yarn::YarnTable;

    fn two_color_palette() -> Palette {
        // id "1" -> Pure White, id "2" -> Black
        Palette::generate(
            &[Color::new(255, 255, 255), Color::new(0, 0, 0)],
            YarnTable::global(),
        )
    }

    #[test]
    fn test_formats_blocks_in_stored_order() {
        let instruction = RowInstruction {
            row_num: 2,
            side: Side::Ws,
            blocks: vec![
                RowBlock {
                    color_id: "1".to_string(),
                    count: 4,
                },
                RowBlock {
                    color_id: "2".to_string(),
                    count: 2,
                },
            ],
        };
        assert_eq!(
            format_instruction(&instruction, &two_color_palette()),
            "Row 2 (WS): Pure White x4, Black x2"
        );
    }

    #[test]
    fn test_missing_color_id_renders_placeholder() {
        let instruction = RowInstruction {
            row_num: 1,
            side: Side::Rs,
            blocks: vec![
                RowBlock {
                    color_id: "2".to_string(),
                    count: 3,
                },
                RowBlock {
                    color_id: "deleted".to_string(),
                    count: 1,
                },
                RowBlock {
                    color_id: "1".to_string(),
                    count: 2,
                },
            ],
        };
        let line = format_instruction(&instruction, &two_color_palette());
        assert_eq!(line, "Row 1 (RS): Black x3, Unknown x1, Pure White x2");
    }

    #[test]
    fn test_written_pattern_in_working_order() {
        let grid = Grid::new(vec![
            vec!["1".to_string(), "1".to_string()],
            vec!["2".to_string(), "1".to_string()],
        ])
        .unwrap();
        let lines = written_pattern(
            &working_order(encode_rows(&grid)),
            &two_color_palette(),
        );
        assert_eq!(
            lines,
            vec![
                // Row 1 is RS: storage row 1 ("2","1") scanned in reverse.
                "Row 1 (RS): Pure White x1, Black x1",
                "Row 2 (WS): Pure White x2",
            ]
        );
    }
}
