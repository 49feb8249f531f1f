pub mod google_finance;
