use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " ag ".yellow());
    println!("Usage:");
    println!("  {} [options] [instruct ...]", "ag".bold().green());
    println!("\nOptions:");
    println!(
        "  {}      Reason step by step (chain of thought).",
        "-c, --cot".bold().cyan()
    );
    println!(
        "  {}    Send piped standard input, instruct words first.",
        "-q, --query".bold().cyan()
    );
    println!(
        "  {}    Chat with the agent; interactive without instruct.",
        "-a, --agent".bold().magenta()
    );
    println!(
        "  {}    Rewrite as a professional English email.",
        "-e, --email".bold().blue()
    );
    println!(
        "  {}   Revise and point out the changes.",
        "-r, --revise".bold().blue()
    );
    println!("  {}  API key (default: $DEEPSEEK_API_KEY).", "--api-key <key>".bold());
    println!("  {}  API base URL (default: $DEEPSEEK_BASE_URL).", "--base-url <url>".bold());
    println!("  {}  Chat model (default: $DEEPSEEK_MODEL).", "--model <name>".bold());
    println!("  {}     Display this help message.", "-h, --help".bold().blue());
    println!("\nArguments:");
    println!("  {}  A text prompt.", "<prompt>".bold().green());
    println!(
        "  {}  An image and an optional question about it.",
        "<image_path> [question]".bold().magenta()
    );
    println!(
        "  {}  A text file to send (combine with -e or -r).",
        "<file_path>".bold().blue()
    );
    println!("\nInteractive commands (ag -a):");
    println!("  {}  Leave the chat.", "quit, exit".bold());
    println!("  {}  Clear the conversation history.", "clear".bold());
    println!("  {}  Ask about an image.", "image <path>".bold());
    println!(
        "  {}  Send a file (operation: email, revise).",
        "file <path> [operation]".bold()
    );
    println!("\nExamples:");
    println!("  {} What is the capital of California?", "ag".bold().green());
    println!("  {} Why is the sky blue?", "ag -c".bold().cyan());
    println!("  {} photo.jpg What colors are in this image?", "ag".bold().magenta());
    println!("  {} draft.txt", "ag -e".bold().blue());
    println!("  {} Summarize this log", "cat app.log | ag -q".bold().cyan());
    println!("{:━^60}", "".yellow());
}
