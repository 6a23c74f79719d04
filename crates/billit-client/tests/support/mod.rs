pub mod bill_testkit;
