//! Retirement Calc CLI
//!
//! Command-line interface for 401k projections, the standalone
//! calculators, and annuity quotes

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand, ValueEnum};

use retirement_calc::annuity::PayoutTiming;
use retirement_calc::calculators::BetterOption;
use retirement_calc::constants::{CatchUpTier, PayoutOption};
use retirement_calc::{Planner, SaverProfile};

#[derive(Parser, Debug)]
#[command(
    name = "retirement_calc",
    version,
    about = "401k growth projections, employer match, Roth comparison, and annuity quotes"
)]
struct Cli {
    /// Plan year for the constants table
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Load the constants table from a JSON file instead
    #[arg(long, global = true, value_name = "PATH")]
    constants: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project 401k growth year by year to retirement
    Project(ProjectArgs),

    /// Employer match earned at a contribution rate
    Match(MatchArgs),

    /// Compare Roth and Traditional treatment of a contribution
    Roth(RothArgs),

    /// Taxes and penalty on a 401k withdrawal
    Withdraw(WithdrawArgs),

    /// Catch-up contribution headroom and its projected value
    CatchUp(CatchUpArgs),

    /// Annuity quotes
    #[command(subcommand)]
    Annuity(AnnuityCommand),

    /// Contribution limits by age band
    Limits,
}

#[derive(clap::Args, Debug)]
struct ProjectArgs {
    #[arg(long)]
    current_age: Option<u8>,

    #[arg(long)]
    retirement_age: Option<u8>,

    #[arg(long)]
    salary: Option<f64>,

    /// Employee deferral as percent of salary
    #[arg(long)]
    contribution_percent: Option<f64>,

    #[arg(long)]
    current_balance: Option<f64>,

    #[arg(long)]
    employer_match_percent: Option<f64>,

    #[arg(long)]
    employer_match_limit: Option<f64>,

    /// Expected annual return in percent, e.g. 7
    #[arg(long)]
    expected_return: Option<f64>,

    /// Write the year-by-year schedule to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct MatchArgs {
    #[arg(long)]
    salary: Option<f64>,

    #[arg(long)]
    contribution_percent: Option<f64>,

    #[arg(long)]
    employer_match_percent: Option<f64>,

    #[arg(long)]
    employer_match_limit: Option<f64>,
}

#[derive(clap::Args, Debug)]
struct RothArgs {
    #[arg(long, default_value_t = 10_000.0)]
    annual_contribution: f64,

    #[arg(long, default_value_t = 30)]
    years: u32,

    #[arg(long)]
    expected_return: Option<f64>,

    /// Marginal tax rate today, percent
    #[arg(long, default_value_t = 22.0)]
    current_tax_rate: f64,

    /// Expected tax rate in retirement, percent
    #[arg(long, default_value_t = 15.0)]
    retirement_tax_rate: f64,
}

#[derive(clap::Args, Debug)]
struct WithdrawArgs {
    #[arg(long, default_value_t = 50_000.0)]
    amount: f64,

    /// Age at withdrawal; fractions like 59.5 are allowed
    #[arg(long, default_value_t = 55.0)]
    age: f64,

    #[arg(long, default_value_t = 22.0)]
    federal_tax_rate: f64,

    #[arg(long, default_value_t = 5.0)]
    state_tax_rate: f64,
}

#[derive(clap::Args, Debug)]
struct CatchUpArgs {
    #[arg(long, default_value_t = 55)]
    age: u8,

    #[arg(long, default_value_t = 65)]
    retirement_age: u8,

    #[arg(long)]
    expected_return: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum AnnuityCommand {
    /// Future value and level monthly payment
    Value(AnnuityValueArgs),

    /// Monthly income under a payout option
    Payout(AnnuityPayoutArgs),

    /// Year-by-year accumulation schedule
    Growth(AnnuityGrowthArgs),

    /// Cost of surrendering a contract today
    Surrender(AnnuitySurrenderArgs),

    /// Fixed vs variable vs indexed on the same purchase
    Compare(AnnuityCompareArgs),
}

#[derive(clap::Args, Debug)]
struct AnnuityValueArgs {
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    /// Annual rate in percent; defaults to the fixed-annuity average
    #[arg(long)]
    rate: Option<f64>,

    /// Deferral years before payments begin
    #[arg(long, default_value_t = 10)]
    years: u32,

    #[arg(long)]
    payout_years: Option<u32>,

    #[arg(long, value_enum, default_value_t = TimingArg::Deferred)]
    timing: TimingArg,
}

#[derive(clap::Args, Debug)]
struct AnnuityPayoutArgs {
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    #[arg(long)]
    rate: Option<f64>,

    #[arg(long)]
    payout_years: Option<u32>,

    #[arg(long, value_enum, default_value_t = OptionArg::LifeOnly)]
    option: OptionArg,
}

#[derive(clap::Args, Debug)]
struct AnnuityGrowthArgs {
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    #[arg(long)]
    rate: Option<f64>,

    #[arg(long, default_value_t = 10)]
    years: u32,
}

#[derive(clap::Args, Debug)]
struct AnnuitySurrenderArgs {
    /// Premium originally paid in
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    #[arg(long)]
    current_value: f64,

    #[arg(long)]
    years_held: u32,

    #[arg(long, default_value_t = 55.0)]
    age: f64,
}

#[derive(clap::Args, Debug)]
struct AnnuityCompareArgs {
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    #[arg(long, default_value_t = 10)]
    years: u32,

    #[arg(long)]
    payout_years: Option<u32>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum TimingArg {
    Immediate,
    Deferred,
}

impl From<TimingArg> for PayoutTiming {
    fn from(value: TimingArg) -> Self {
        match value {
            TimingArg::Immediate => PayoutTiming::Immediate,
            TimingArg::Deferred => PayoutTiming::Deferred,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OptionArg {
    LifeOnly,
    PeriodCertain,
    JointSurvivor,
}

impl From<OptionArg> for PayoutOption {
    fn from(value: OptionArg) -> Self {
        match value {
            OptionArg::LifeOnly => PayoutOption::LifeOnly,
            OptionArg::PeriodCertain => PayoutOption::LifeWithPeriodCertain,
            OptionArg::JointSurvivor => PayoutOption::JointSurvivor,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let planner = build_planner(&cli)?;

    match cli.command {
        Command::Project(args) => run_project(&planner, args)?,
        Command::Match(args) => run_match(&planner, args),
        Command::Roth(args) => run_roth(&planner, args),
        Command::Withdraw(args) => run_withdraw(&planner, args),
        Command::CatchUp(args) => run_catch_up(&planner, args),
        Command::Annuity(command) => run_annuity(&planner, command),
        Command::Limits => run_limits(&planner),
    }

    Ok(())
}

fn build_planner(cli: &Cli) -> anyhow::Result<Planner> {
    let planner = if let Some(path) = &cli.constants {
        Planner::from_json_path(path)
            .with_context(|| format!("failed to load constants from {}", path.display()))?
    } else if let Some(year) = cli.year {
        Planner::for_year(year)?
    } else {
        Planner::new()
    };

    Ok(planner.with_base_year(Utc::now().year()))
}

fn run_project(planner: &Planner, args: ProjectArgs) -> anyhow::Result<()> {
    let defaults = planner.constants().input_defaults.clone();
    let profile = SaverProfile::new(
        0,
        args.current_age.unwrap_or(defaults.current_age),
        args.retirement_age.unwrap_or(defaults.retirement_age),
        args.salary.unwrap_or(defaults.salary),
        args.contribution_percent
            .unwrap_or(defaults.contribution_percent),
        args.current_balance.unwrap_or(defaults.current_balance),
        args.employer_match_percent
            .unwrap_or(defaults.employer_match_percent),
        args.employer_match_limit
            .unwrap_or(defaults.employer_match_limit),
        args.expected_return.unwrap_or(defaults.expected_return),
    );

    let projection = planner.project(&profile);

    println!("401k Growth Projection");
    println!("  Current Age: {}", projection.current_age);
    println!("  Retirement Age: {}", projection.retirement_age);
    println!("  Salary: ${:.0}", profile.salary);
    println!(
        "  Contribution: {:.1}% (${:.0}/year before caps)",
        profile.contribution_percent, projection.annual_contribution
    );
    println!("  Full Employer Match: ${:.0}/year", projection.employer_match);
    println!("  Starting Balance: ${:.0}", projection.starting_balance);
    println!();

    println!(
        "{:>5} {:>6} {:>14} {:>14} {:>14} {:>14}",
        "Age", "Year", "Contribution", "Match", "Growth", "Balance"
    );
    println!("{}", "-".repeat(72));
    for row in &projection.years {
        println!(
            "{:>5} {:>6} {:>14.0} {:>14.0} {:>14.0} {:>14.0}",
            row.age, row.year, row.contribution, row.employer_match, row.growth, row.balance
        );
    }

    println!("\nSummary:");
    println!("  Years to Retirement: {}", projection.years_to_retirement);
    println!("  Projected Balance: ${:.0}", projection.projected_balance);
    println!("  Total Contributions: ${:.0}", projection.total_contributions);
    println!(
        "  Total Employer Match: ${:.0}",
        projection.total_employer_match
    );
    println!("  Total Growth: ${:.0}", projection.total_growth);

    if let Some(path) = &args.csv {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        for row in &projection.years {
            writer.serialize(row)?;
        }
        writer.flush()?;
        println!("\nYear-by-year schedule written to: {}", path.display());
    }

    Ok(())
}

fn run_match(planner: &Planner, args: MatchArgs) {
    let defaults = planner.constants().input_defaults.clone();
    let result = planner.employer_match(
        args.salary.unwrap_or(defaults.salary),
        args.contribution_percent
            .unwrap_or(defaults.contribution_percent),
        args.employer_match_percent
            .unwrap_or(defaults.employer_match_percent),
        args.employer_match_limit
            .unwrap_or(defaults.employer_match_limit),
    );

    println!("Employer Match");
    println!(
        "  Your Contribution: ${:.0} ({:.1}% of salary)",
        result.your_contribution, result.contribution_percent
    );
    println!("  Employer Match: ${:.0}", result.employer_match);
    println!("  Total Annual Addition: ${:.0}", result.total_annual);
    println!(
        "  Free Money: {:.1}% of salary",
        result.free_money_percent
    );
    if result.is_maxing_match {
        println!("  Capturing the full match at this contribution rate");
    } else {
        println!(
            "  Below the {:.1}% match limit; match dollars left unclaimed",
            result.employer_match_limit
        );
    }
}

fn run_roth(planner: &Planner, args: RothArgs) {
    let expected_return = args
        .expected_return
        .unwrap_or(planner.constants().input_defaults.expected_return);
    let result = planner.roth_vs_traditional(
        args.annual_contribution,
        args.years,
        expected_return,
        args.current_tax_rate,
        args.retirement_tax_rate,
    );

    println!("Roth vs Traditional ({} years)", args.years);
    println!("  Traditional Balance: ${:.0}", result.traditional_balance);
    println!(
        "  Traditional After Tax: ${:.0}",
        result.traditional_after_tax
    );
    println!("  Roth Balance (tax-free): ${:.0}", result.roth_balance);
    println!("  Up-front Tax Deferred: ${:.0}", result.tax_savings_now);
    println!("  Tax Due at Retirement: ${:.0}", result.tax_in_retirement);

    let verdict = match result.better_option {
        BetterOption::Roth => "Roth",
        BetterOption::Traditional => "Traditional",
        BetterOption::Same => "Either (inside the decision band)",
    };
    println!("  Better Option: {}", verdict);
    println!("  After-tax Difference: ${:.0}", result.difference);
}

fn run_withdraw(planner: &Planner, args: WithdrawArgs) {
    let result = planner.withdrawal(
        args.amount,
        args.age,
        args.federal_tax_rate,
        args.state_tax_rate,
    );

    println!("Withdrawal of ${:.0} at age {}", args.amount, args.age);
    println!("  Federal Tax: ${:.0}", result.federal_tax);
    println!("  State Tax: ${:.0}", result.state_tax);
    if result.is_early_withdrawal {
        println!("  Early Withdrawal Penalty: ${:.0}", result.early_penalty);
    }
    println!("  Total Taxes: ${:.0}", result.total_taxes);
    println!("  Net Amount: ${:.0}", result.net_amount);
    println!("  Effective Tax Rate: {:.1}%", result.effective_tax_rate);
}

fn run_catch_up(planner: &Planner, args: CatchUpArgs) {
    let expected_return = args
        .expected_return
        .unwrap_or(planner.constants().input_defaults.expected_return);
    let years = args.retirement_age.saturating_sub(args.age) as u32;
    let result = planner.catch_up(args.age, years, expected_return);

    let tier = match result.tier {
        CatchUpTier::None => "none (under 50)",
        CatchUpTier::Standard => "standard",
        CatchUpTier::Super => "super (ages 60-63)",
    };

    println!("Catch-Up Contributions at age {}", result.age);
    println!("  Tier: {}", tier);
    println!("  Base Limit: ${:.0}", result.base_limit);
    println!("  Catch-Up Amount: ${:.0}", result.catch_up_amount);
    println!("  Total Limit: ${:.0}", result.total_limit);
    println!(
        "  Additional Savings over {} years: ${:.0}",
        years, result.additional_savings
    );
    println!(
        "  Projected Growth at {:.1}%: ${:.0}",
        expected_return, result.projected_growth
    );
}

fn run_annuity(planner: &Planner, command: AnnuityCommand) {
    let annuity = &planner.constants().annuity;
    let default_rate = annuity.fixed.average;
    let default_payout_years = planner
        .constants()
        .investment_defaults
        .default_payout_years();

    match command {
        AnnuityCommand::Value(args) => {
            let quote = planner.annuity(
                args.principal,
                args.rate.unwrap_or(default_rate),
                args.years,
                args.payout_years.unwrap_or(default_payout_years),
                args.timing.into(),
            );

            println!("Annuity Quote");
            println!("  Principal: ${:.0}", quote.principal);
            println!("  Rate: {:.2}%", quote.rate);
            println!("  Future Value after {} years: ${:.0}", quote.years, quote.future_value);
            println!("  Monthly Payment: ${:.0}", quote.monthly_payment);
            println!("  Annual Payout: ${:.0}", quote.annual_payout);
            println!(
                "  Total over {} years: ${:.0}",
                quote.payout_years, quote.total_payout
            );
        }
        AnnuityCommand::Payout(args) => {
            let quote = planner.annuity_payout(
                args.principal,
                args.rate.unwrap_or(default_rate),
                args.payout_years.unwrap_or(default_payout_years),
                args.option.into(),
            );

            println!("Payout Quote");
            println!("  Option Factor: {:.2}", quote.factor);
            println!("  Monthly Payment: ${:.0}", quote.monthly_payment);
            println!("  Annual Payout: ${:.0}", quote.annual_payout);
            println!(
                "  Total over {} years: ${:.0}",
                quote.payout_years, quote.total_payout
            );
        }
        AnnuityCommand::Growth(args) => {
            let schedule =
                planner.annuity_growth(args.principal, args.rate.unwrap_or(default_rate), args.years);

            println!("Annuity Growth at {:.2}%", schedule.rate);
            println!("{:>5} {:>14} {:>14}", "Year", "Growth", "Balance");
            println!("{}", "-".repeat(36));
            for row in &schedule.rows {
                println!("{:>5} {:>14.0} {:>14.0}", row.year, row.growth, row.balance);
            }
            println!("\n  Final Value: ${:.0}", schedule.final_value);
            println!("  Total Growth: ${:.0}", schedule.total_growth);
        }
        AnnuityCommand::Surrender(args) => {
            let result = planner.annuity_surrender(
                args.principal,
                args.current_value,
                args.years_held,
                args.age,
            );

            println!(
                "Surrender after {} years at age {}",
                result.years_held, result.age
            );
            println!(
                "  Surrender Charge: ${:.0} ({:.0}% of value)",
                result.surrender_charge,
                result.surrender_charge_rate * 100.0
            );
            if result.is_early_withdrawal {
                println!("  Early Withdrawal Penalty: ${:.0}", result.early_penalty);
            }
            println!("  Total Deductions: ${:.0}", result.total_deductions);
            println!("  Net Amount: ${:.0}", result.net_amount);
            if !result.in_surrender_period {
                println!("  Outside the surrender charge period");
            }
        }
        AnnuityCommand::Compare(args) => {
            let comparison = planner.annuity_comparison(
                args.principal,
                args.years,
                args.payout_years.unwrap_or(default_payout_years),
            );

            println!(
                "Annuity Comparison (${:.0} over {} years)",
                comparison.principal, comparison.years
            );
            println!(
                "{:>18} {:>8} {:>14} {:>14}",
                "Type", "Rate", "Future Value", "Monthly"
            );
            println!("{}", "-".repeat(58));
            for quote in [&comparison.fixed, &comparison.variable, &comparison.indexed] {
                println!(
                    "{:>18} {:>7.2}% {:>14.0} {:>14.0}",
                    quote.label, quote.rate, quote.future_value, quote.monthly_payment
                );
            }
            println!("\n  Safest: {}", comparison.safest);
            println!("  Highest Growth: {}", comparison.highest_growth);
        }
    }
}

fn run_limits(planner: &Planner) {
    let constants = planner.constants();
    let limits = &constants.contribution_limits;

    println!("Contribution Limits ({})", constants.year);
    println!(
        "{:>12} {:>12} {:>12} {:>12}",
        "Age Band", "Employee", "Catch-Up", "Total"
    );
    println!("{}", "-".repeat(52));
    for band in planner.limit_bands() {
        println!(
            "{:>12} {:>12.0} {:>12.0} {:>12.0}",
            band.age_band, band.employee, band.catch_up, band.total
        );
    }

    println!("\n  Total Additions Limit: ${:.0}", limits.total_additions);
    println!("  Compensation Limit: ${:.0}", limits.compensation);
    println!(
        "  Penalty-Free Withdrawal Age: {}",
        constants.early_withdrawal.penalty_free_age
    );
    println!(
        "  Required Minimum Distributions: {}",
        constants.age_thresholds.required_min_distribution
    );
}
