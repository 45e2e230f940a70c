pub mod ac_summary;
