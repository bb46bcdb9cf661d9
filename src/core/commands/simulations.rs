//! Theatrical commands: `sudo`, `nmap`, `matrix`.
//!
//! Each prints something right away and schedules the rest as deferred
//! output, so the terminal appears to be working.

use std::time::Duration;

use rand::Rng;

use crate::config::{PROMPT_HOST, delays, matrix as rain};
use crate::models::OutputLine;

use super::CommandResult;

/// Open ports reported by every scan.
const NMAP_PORTS: &[&str] = &["22/tcp   open  ssh", "80/tcp   open  http", "443/tcp  open  https"];

pub(super) fn sudo() -> CommandResult {
    CommandResult::line(OutputLine::text("[sudo] password for guest: ")).with_deferred(
        Duration::from_millis(delays::SUDO_MS),
        vec![OutputLine::error(format!(
            "Sorry, user guest is not allowed to execute commands as root on {PROMPT_HOST}."
        ))],
    )
}

pub(super) fn nmap(target: &str) -> CommandResult {
    let header = vec![
        OutputLine::text("Starting Nmap 7.94 ( https://nmap.org )"),
        OutputLine::text(format!("Nmap scan report for {target}")),
        OutputLine::text("Host is up (0.00034s latency)."),
        OutputLine::text("Not shown: 996 closed tcp ports (reset)"),
        OutputLine::warning("PORT     STATE SERVICE"),
    ];

    let mut report: Vec<OutputLine> = NMAP_PORTS.iter().copied().map(OutputLine::text).collect();
    report.push(OutputLine::success(
        "Nmap done: 1 IP address (1 host up) scanned in 1.4 seconds",
    ));

    CommandResult::output(header).with_deferred(Duration::from_millis(delays::NMAP_MS), report)
}

pub(super) fn matrix<R: Rng + ?Sized>(rng: &mut R) -> CommandResult {
    let mut result = CommandResult::line(OutputLine::success("Wake up, Neo..."));
    for frame in 0..rain::FRAMES {
        let delay = Duration::from_millis(delays::MATRIX_FRAME_MS * (frame as u64 + 1));
        result = result.with_deferred(delay, vec![OutputLine::matrix(rain_line(rng))]);
    }
    result
}

/// One line of digital rain: random `0`/`1` characters.
fn rain_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let width = rng.gen_range(rain::MIN_WIDTH..rain::MAX_WIDTH);
    (0..width)
        .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
        .collect()
}
