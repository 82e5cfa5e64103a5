pub mod backup;
pub mod csv_batch;
pub mod fs;
pub mod repositories;
pub mod site_files;
pub mod time;
pub mod util;
