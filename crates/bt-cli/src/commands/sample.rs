//! `bt sample`: print the bundled sample badge log.
//!
//! The output pipes straight back into `bt calculate`.

use anyhow::Result;

/// One real employee-day: office entry, three cafeteria trips, no final
/// office exit.
pub const SAMPLE_LOG: &str = "\
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 10:14:29\tLD CHN-1 (ASC) IN - 1\tEntry Granted
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 12:51:32\tLD CHN-1 (ASC) Cafeteria IN-1\tExit Granted
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 12:51:48\tLD CHN-1 (ASC) Cafeteria OUT-1\tEntry Granted
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 12:52:13\tLD CHN-1 (ASC) Cafeteria IN-2\tExit Granted
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 12:54:45\tLD CHN-1 (ASC) Cafeteria OUT-1\tEntry Granted
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 13:16:30\tLD CHN-1 (ASC) Cafeteria IN-2\tExit Granted
104138\tLingesh Balamurugan\t10-12-2025\t10-12-2025 13:32:26\tLD CHN-1 (ASC) Cafeteria OUT-2\tEntry Granted";

pub fn run() -> Result<()> {
    println!("{SAMPLE_LOG}");
    Ok(())
}
