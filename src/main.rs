/***********************************************************
 *
 *      tcpfuzz - poke a TCP server with awkward payloads.
 *          Normal text, invalid UTF-8, split writes, oversized lines,
 *          rapid open/close, garbage bytes and a fake TLS hello.
 *
 ***********************************************************/

use std::io;

use clap::Parser;
use tcpfuzz::modules::print_banner;
use tcpfuzz::utils::init_tracing;
use tcpfuzz::{target_input, Console};

/// TcpFuzzClient: interactive TCP robustness tester.
/// Prompts for a server address, then sends the selected test payloads.
#[derive(Parser, Debug)]
#[command(name = "tcpfuzz", version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();
    init_tracing();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    print_banner(&mut out)?;
    let target = target_input(&mut input, &mut out)?;
    tracing::info!(%target, "target set");

    let mut console = Console::new(target, input, out);
    console.run().await?;
    Ok(())
}
