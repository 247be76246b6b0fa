pub fn handle_command(input: &str) -> Result<(), String> {
    match input.to_lowercase().as_str() {
        "help" => {
            println!("\n🥗 Nutrition Commands:");
            println!("  <food>            - Search and analyse the first matching food");
            println!("  search <food>     - Same as above");
            println!("  list <food>       - Show every match without asking the coach");
            println!("  Example: chicken, search beef, list oil");
            println!();

            println!("🌍 Region Commands:");
            println!("  region <place>    - Ask the coach to consider local eating habits");
            println!("  region            - Clear the region hint");
            println!();

            println!("📄 Report Commands:");
            println!("  report [file]     - Save the last result as a PDF");
            println!();

            println!("⚙️ System Commands:");
            println!("  help  - Show this help menu");
            println!("  exit  - Exit the program");
            Ok(())
        },
        "exit" | "quit" => {
            println!("👋 Goodbye!");
            std::process::exit(0);
        },
        _ => Err("Unknown system command. Type 'help' for available commands.".to_string())
    }
}
