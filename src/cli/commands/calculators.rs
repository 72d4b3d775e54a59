use finwise_core::{MaturityCalculator, MaturityQuote};
use finwise_domain::ProductKind;

use crate::cli::context::{parse_amount, parse_count, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_percent;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "fd",
            "Project a fixed deposit at maturity",
            "fd [principal] [rate%] [months]",
            cmd_fd,
        ),
        CommandEntry::new(
            "rd",
            "Project a recurring deposit at maturity",
            "rd [monthly] [rate%] [months]",
            cmd_rd,
        ),
        CommandEntry::new(
            "sip",
            "Project a systematic investment plan",
            "sip [monthly] [return%] [years]",
            cmd_sip,
        ),
    ]
}

fn cmd_fd(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, ProductKind::Fd, args)
}

fn cmd_rd(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, ProductKind::Rd, args)
}

fn cmd_sip(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    run(context, ProductKind::Sip, args)
}

/// Missing arguments fall back to the configured calculator defaults.
fn run(context: &mut ShellContext, kind: ProductKind, args: &[&str]) -> CommandResult {
    if args.len() > 3 {
        return Err(CommandError::InvalidArguments(format!(
            "{} takes at most three arguments",
            kind
        )));
    }
    let defaults = &context.config.calculator;
    let (amount, rate, duration) = match kind {
        ProductKind::Fd => (defaults.fd_amount, defaults.fd_rate, defaults.fd_months),
        ProductKind::Rd => (defaults.rd_amount, defaults.rd_rate, defaults.rd_months),
        ProductKind::Sip => (defaults.sip_amount, defaults.sip_return, defaults.sip_years),
    };
    let amount = match args.first() {
        Some(raw) => parse_amount("amount", raw)?,
        None => amount,
    };
    let rate = match args.get(1) {
        Some(raw) => parse_amount("rate", raw.trim_end_matches('%'))?,
        None => rate,
    };
    let duration = match args.get(2) {
        Some(raw) => parse_count(kind.duration_unit(), raw)?,
        None => duration,
    };

    let quote = MaturityCalculator::compute(kind, amount, rate, duration)?;
    print_quote(context, &quote, amount, rate, duration);
    Ok(())
}

fn print_quote(context: &ShellContext, quote: &MaturityQuote, amount: f64, rate: f64, duration: u32) {
    let money = context.money();
    let kind = quote.kind();
    output::section(format!("{} Calculator", kind));
    match quote {
        MaturityQuote::Fd(fd) => {
            output::field("Principal", money.format(amount));
            output::field("Interest rate", format_percent(rate));
            output::field("Tenure", format!("{} months", duration));
            output::field("Maturity amount", money.format(fd.maturity_amount));
            output::field("Interest earned", money.format(fd.interest_earned));
        }
        MaturityQuote::Rd(rd) => {
            output::field("Monthly deposit", money.format(amount));
            output::field("Interest rate", format_percent(rate));
            output::field("Tenure", format!("{} months", duration));
            output::field("Total deposited", money.format(rd.total_deposited));
            output::field("Maturity amount", money.format(rd.maturity_amount));
            output::field("Interest earned", money.format(rd.interest_earned));
        }
        MaturityQuote::Sip(sip) => {
            output::field("Monthly investment", money.format(amount));
            output::field("Expected return", format_percent(rate));
            output::field("Period", format!("{} years", duration));
            output::field("Total invested", money.format(sip.total_invested));
            output::field("Future value", money.format(sip.future_value));
            output::field(
                "Returns",
                format!("{} ({}%)", money.format(sip.returns), sip.returns_percentage),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::cli::context::{test_context, CommandError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn calculators_accept_defaults_and_overrides() {
        let (mut context, _dir) = test_context(today());
        context.process_line("fd").unwrap();
        context.process_line("rd 1000 6.5% 12").unwrap();
        context.process_line("sip 2000 12 10").unwrap();
    }

    #[test]
    fn rejects_fractional_durations() {
        let (mut context, _dir) = test_context(today());
        let err = context.process_line("fd 10000 6.5 1.5").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }
}
