//! Guided walkthrough of the shell state machine.
//!
//! Drives every visitor flow end to end: a PHQ-9 screener, the priority
//! booking handoff, a direct message to the practice, and the assistant
//! dock. Flow events and booking stages appear as tracing output.
//!
//! Usage:
//!   cargo run -p mindlens-shell --example walkthrough

use mindlens_booking::catalog;
use mindlens_core::directory;
use mindlens_instruments::get_instrument;
use mindlens_messaging::draft::{ReplyChannel, Urgency};
use mindlens_shell::assistant::AssistantDock;
use mindlens_shell::config;
use mindlens_shell::state::AppShell;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let lead = directory::lead_counselor();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      MindLens Shell — Guided Walkthrough         ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  Counselor:   {:<34} ║", lead.name);
    println!("║  Support:     {:<34} ║", directory::SUPPORT_EMAIL);
    println!("║  WhatsApp:    {:<34} ║", directory::WHATSAPP_LINE);
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    let mut shell = AppShell::new();

    // Step 1: run a PHQ-9 screener to completion.
    println!("Running the PHQ-9 screener...");
    let phq9 = get_instrument("phq9").ok_or_else(|| eyre::eyre!("phq9 missing from catalog"))?;
    shell.open_screener("phq9")?;

    let answers: [u8; 9] = [1, 2, 1, 2, 1, 2, 1, 1, 0];
    let mut outcome = None;
    for (item, value) in phq9.items().iter().zip(answers) {
        println!("  [{value}] {}", item.prompt);
        outcome = shell.submit_screener_answer(value)?;
    }
    let result = outcome.ok_or_else(|| eyre::eyre!("screener did not complete"))?;

    println!();
    println!("  Total:    {} / {}", result.total, phq9.max_total());
    println!("  Band:     {}", result.label);
    println!("  Guidance: {}", result.guidance);
    println!();

    // Step 2: the result screen's priority booking handoff.
    println!("Booking a priority session...");
    let today = jiff::Zoned::now().date();
    let visit_date = today.checked_add(jiff::Span::new().days(3))?;
    let slot = catalog::time_slots()[2];

    shell.begin_priority_booking()?;
    shell.booking_mut()?.select_service("individual")?;
    shell.advance_booking()?;
    shell.booking_mut()?.set_date(visit_date, today)?;
    shell.booking_mut()?.set_slot(slot)?;
    shell.advance_booking()?;
    shell
        .booking_mut()?
        .contact("Asha Verma", "asha.verma@example.com", "Prefer evening follow-ups");
    let confirmation = shell
        .advance_booking()?
        .ok_or_else(|| eyre::eyre!("booking did not finalize"))?;

    println!("  ✅ Confirmed {}", confirmation.confirmation_id);
    println!("     Service: {}", confirmation.service_id);
    println!("     When:    {} at {}", confirmation.date, catalog::slot_label(slot));
    println!("     Fee:     ${}", confirmation.fee_usd);
    println!();

    // Step 3: send the practice a direct message.
    println!("Messaging the practice...");
    shell.open_messaging();
    let draft = shell.messaging_mut()?;
    draft.body = "Could we add a second weekly session this month?".to_string();
    draft.urgency = Urgency::Urgent;
    draft.reply_channel = ReplyChannel::WhatsApp;
    let receipt = shell.dispatch_message(jiff::Timestamp::now())?;

    println!("  ✅ Receipt {}", receipt.id);
    println!("     Reply via {} by {}", receipt.reply_channel.label(), receipt.expected_reply_by);
    println!();

    // Step 4: the assistant dock, including the empty-completion path.
    println!("Talking to the assistant dock...");
    let mut dock = AssistantDock::new();
    dock.open();
    dock.send("I've been sleeping badly and feel on edge.");
    dock.append_assistant_reply("");
    dock.switch_mode();
    dock.start_live();
    dock.close();

    for message in &dock.transcript().messages {
        println!("  [{:?}] {}", message.role, message.content);
    }
    println!("  Live session still running after close: {}", dock.is_live());
    println!();

    // Step 5: the practice presentation config, redacted for display.
    let config = config::ShellConfig::starter();
    let info = config::config_info(&config);
    println!("Presentation config:");
    println!("  Practice:  {}", info.practice_name);
    println!("  Support:   {}", info.support_email);
    println!("  WhatsApp:  {}", info.whatsapp_hint);
    println!();
    println!("   Note: this walkthrough does NOT write config to disk.");

    Ok(())
}
