use std::process;
use std::time::Instant;
use clap::Parser;

use phonebook::{
    elapsed_ms,
    logger,
    config::Config,
    configuration as cfg,
    report::{ConsoleReporter, LogReporter},
    ContactStore,
    ReportContext,
    SourceResolver,
    Scenario,
    validator,
};

#[derive(Parser, Debug)]
#[command(about = "Phonebook Demo", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// The device identifier, overrides the configuration
    #[arg(short, long, value_name = "ID")]
    device: Option<String>,

    /// Narrate through the logger instead of stdout
    #[arg(long, default_value_t = false)]
    log_report: bool,
}

fn main() {
    let opts = Options::parse();
    let mut b = cfg::Builder::new();

    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = b.load(path) {
            eprintln!("{e}");
            process::exit(1);
        }
    }
    if let Some(device) = opts.device.as_ref() {
        b.with_device_id(device);
    }

    let cfg = match b.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}, use --config or --device");
            process::exit(1);
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    logger::setup(cfg.log_level(), cfg.log_file());

    let mut ctx = match opts.log_report {
        true => ReportContext::new(Box::new(LogReporter)),
        false => ReportContext::new(Box::new(ConsoleReporter)),
    };

    let resolver = SourceResolver::from_config(cfg.as_ref());
    ctx.info(&resolver.data_source_info());
    ctx.info(&resolver.data_info());

    let results = [
        basic_operations(&mut ctx, cfg.as_ref(), &resolver),
        duplicate_prevention(&mut ctx, cfg.as_ref(), &resolver),
        boundary_validation(&mut ctx, &resolver),
        bulk_performance(&mut ctx, cfg.as_ref(), &resolver),
    ];

    let passed = results.iter().filter(|v| **v).count();
    ctx.summary(results.len(), passed, results.len() - passed, 0);
    logger::teardown();

    if passed != results.len() {
        process::exit(2);
    }
}

fn basic_operations(ctx: &mut ReportContext, cfg: &dyn Config, resolver: &SourceResolver) -> bool {
    ctx.start_test("Basic Operations");
    let mut phone = match ContactStore::new(cfg.device_id()) {
        Ok(v) => v,
        Err(e) => {
            ctx.fail(&format!("Creating contact store error: {e}"));
            return false;
        }
    };

    let contacts = resolver.contacts();
    let Some(first) = contacts.first().cloned() else {
        ctx.fail("No contacts to work with");
        return false;
    };

    ctx.step(&format!("Adding {}", first));
    let mut ok = phone.add_new_contact(first.clone());

    ctx.step("Querying with a different letter case");
    let found = phone.query_contact(&first.name().to_uppercase())
        .map(|v| v.phone_number().to_string())
        .unwrap_or_default();
    ok &= ctx.data_comparison(first.phone_number(), &found);

    ctx.step("Removing the contact");
    ok &= phone.remove_contact(&first);
    ok &= phone.is_empty();

    ctx.end_test("Basic Operations");
    ok
}

fn duplicate_prevention(ctx: &mut ReportContext, cfg: &dyn Config, resolver: &SourceResolver) -> bool {
    ctx.start_test("Duplicate Prevention");
    ctx.scenario_setup(Scenario::Duplicate.as_str());

    let mut phone = match ContactStore::new(cfg.device_id()) {
        Ok(v) => v,
        Err(e) => {
            ctx.fail(&format!("Creating contact store error: {e}"));
            return false;
        }
    };

    let contacts = resolver.scenario_contacts(Scenario::Duplicate);
    let added = phone.add_all_contacts(contacts.clone());
    ctx.test_data("Duplicate Scenario", &contacts);
    ctx.info(&phone.listing());

    let ok = added == contacts.len() - 1;
    ctx.validation_result(
        "Duplicate rejection",
        ok,
        &format!("{} of {} contacts added", added, contacts.len())
    );

    ctx.end_test("Duplicate Prevention");
    ok
}

fn boundary_validation(ctx: &mut ReportContext, resolver: &SourceResolver) -> bool {
    ctx.start_test("Boundary Validation");
    let mut ok = true;

    for scenario in [Scenario::Boundary, Scenario::Mixed] {
        ctx.scenario_setup(scenario.as_str());
        for (i, contact) in resolver.scenario_contacts(scenario).iter().enumerate() {
            ctx.data_iteration(i + 1, contact.name());
            let result = validator::validate_contact(contact);
            ctx.validation_result("Field bounds", result.is_valid(), result.message());

            if scenario == Scenario::Boundary {
                ok &= result.is_valid();
            }
        }
    }

    ctx.end_test("Boundary Validation");
    ok
}

fn bulk_performance(ctx: &mut ReportContext, cfg: &dyn Config, resolver: &SourceResolver) -> bool {
    ctx.start_test("Bulk Performance");
    let mut phone = match ContactStore::new(cfg.device_id()) {
        Ok(v) => v,
        Err(e) => {
            ctx.fail(&format!("Creating contact store error: {e}"));
            return false;
        }
    };

    let contacts = resolver.scenario_contacts(Scenario::Performance);
    ctx.step(&format!("Adding {} generated contacts", contacts.len()));

    let started = Instant::now();
    let added = phone.add_all_contacts(contacts.clone());
    ctx.performance_metric("Bulk Add", elapsed_ms!(started));

    let started = Instant::now();
    let found = contacts.iter()
        .filter(|v| phone.contact_exists(v.name()))
        .count();
    ctx.performance_metric("Bulk Query", elapsed_ms!(started));

    let ok = added == contacts.len() && found == contacts.len();
    ctx.validation_result(
        "Bulk consistency",
        ok,
        &format!("added {}, found {} of {}", added, found, contacts.len())
    );

    ctx.end_test("Bulk Performance");
    ok
}
