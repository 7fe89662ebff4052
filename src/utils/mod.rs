pub mod date_ru;
