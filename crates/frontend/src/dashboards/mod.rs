pub mod d402_indicator_explorer;
