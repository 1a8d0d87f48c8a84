pub mod scan_result;
