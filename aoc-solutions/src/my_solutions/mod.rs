pub mod year_2022;
