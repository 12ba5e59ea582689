use crate::types::{
    ColumnRenderableGame, HeadGettableGame, LengthGettableGame, Position, RewardGettableGame,
    SizeDeterminableGame,
};

use super::Board;

impl<const W: usize, const H: usize> SizeDeterminableGame for Board<W, H> {
    fn get_width(&self) -> u32 {
        W as u32
    }

    fn get_height(&self) -> u32 {
        H as u32
    }
}

impl<const W: usize, const H: usize> HeadGettableGame for Board<W, H> {
    fn get_head_as_position(&self) -> Position {
        self.head()
    }

    fn get_tail_as_position(&self) -> Position {
        self.tail()
    }
}

impl<const W: usize, const H: usize> LengthGettableGame for Board<W, H> {
    fn get_length(&self) -> usize {
        self.length()
    }
}

impl<const W: usize, const H: usize> RewardGettableGame for Board<W, H> {
    fn get_reward_as_position(&self) -> Option<Position> {
        self.reward()
    }
}

impl<const W: usize, const H: usize> ColumnRenderableGame<H> for Board<W, H> {
    fn render_column(&self, index: usize) -> [bool; H] {
        let mut lit = [false; H];
        if let Some(column) = self.column(index) {
            for (out, cell) in lit.iter_mut().zip(column.iter()) {
                *out = cell.is_lit();
            }
        }
        lit
    }
}
