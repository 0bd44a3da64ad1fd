pub mod spelling;
