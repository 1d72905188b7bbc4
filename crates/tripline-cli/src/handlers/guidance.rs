use std::path::Path;

pub fn handle(data_dir: &Path) {
    println!("tripline - sensor trip-event recorder\n");
    println!("Data directory: {}\n", data_dir.display());
    println!("Quick commands:");
    println!("  tripline record <sensor>    # Record one trip event");
    println!("  tripline count <sensor>     # Outstanding count (log + reported)");
    println!("  tripline status <sensor>    # Per-hour breakdown of the log");
    println!("  tripline sensors            # List sensors with a log file");
    println!("  tripline export <sensor>    # Preview elapsed windows as CSV\n");
    println!("For more commands:");
    println!("  tripline --help");
}
