//! DOM grid renderer
//!
//! Builds the board once as rows of `div` cells inside `#board`, then only
//! rewrites cells whose contents changed.

use anyhow::{Result, anyhow};
use web_sys::{Document, Element};

use super::CellKind;
use crate::session::Snapshot;
use crate::sim::Grid;

const CELL_STYLE: &str = "width:24px;height:24px;border:1px solid #eee;display:flex;\
align-items:center;justify-content:center;font-size:18px;user-select:none;";

pub struct DomRenderer {
    document: Document,
    board_size: i32,
    /// Row-major, one per board cell
    cells: Vec<Element>,
    drawn: Vec<CellKind>,
}

impl DomRenderer {
    /// Create the cell elements under `#board`
    pub fn new(document: Document, board_size: i32) -> Result<Self> {
        let board = document
            .get_element_by_id("board")
            .ok_or_else(|| anyhow!("missing #board element"))?;
        board.set_inner_html("");

        let grid = Grid::new(board_size);
        let mut cells = Vec::with_capacity(grid.area());
        for _y in 0..board_size {
            let row = create(&document, "div")?;
            set_style(&row, "display:flex;")?;
            for _x in 0..board_size {
                let cell = create(&document, "div")?;
                set_style(&cell, CELL_STYLE)?;
                cell.set_text_content(Some(CellKind::Empty.emoji()));
                append(&row, &cell)?;
                cells.push(cell);
            }
            append(&board, &row)?;
        }

        log::info!("Board built: {} cells", cells.len());

        Ok(Self {
            document,
            board_size,
            drawn: vec![CellKind::Empty; cells.len()],
            cells,
        })
    }

    /// Draw one frame
    pub fn render(&mut self, snap: &Snapshot) {
        if snap.board_size != self.board_size {
            log::warn!(
                "Snapshot board {} does not match rendered board {}",
                snap.board_size,
                self.board_size
            );
            return;
        }

        let grid = Grid::new(self.board_size);
        for (i, cell) in grid.cells().enumerate() {
            let kind = snap.cell_kind(cell);
            if self.drawn[i] != kind {
                self.cells[i].set_text_content(Some(kind.emoji()));
                self.drawn[i] = kind;
            }
        }

        self.set_text("score", &snap.score.to_string());
        self.set_text("high-score", &snap.high_score.to_string());

        if let Some(el) = self.document.get_element_by_id("game-over") {
            let class = if snap.game_over { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

fn create(document: &Document, tag: &str) -> Result<Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{tag}> failed: {:?}", e))
}

fn set_style(el: &Element, style: &str) -> Result<()> {
    el.set_attribute("style", style)
        .map_err(|e| anyhow!("set style failed: {:?}", e))
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append failed: {:?}", e))
}
