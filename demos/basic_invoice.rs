use chrono::NaiveDate;
use fakturace::payment::PaymentCodeBuilder;
use fakturace::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = AddressBuilder::client("Kupec a.s.")
        .street("Náměstí Míru 1")
        .city("Praha")
        .zip("120 00")
        .vat_id("CZ12345678")
        .ir("12345678")
        .build();
    let provider = AddressBuilder::provider("Dodavatel s.r.o.")
        .street("Masarykova 10")
        .city("Brno")
        .zip("602 00")
        .bank_account("2600000000", "2010")
        .build();

    let invoice = InvoiceBuilder::new(client, provider, Creator::new("Jan Novák"))
        .title("Faktura")
        .number("2024-0042")
        .variable_symbol("20240042")
        .currency("Kč")
        .currency_locale("cs_CZ.UTF-8")
        .issue_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .use_tax(true)
        .rounding_result(true)
        .add_item(
            Item::new(10, dec!(1250))
                .unwrap()
                .with_description("Vývoj software")
                .with_unit("hod")
                .with_tax(21)
                .unwrap(),
        )
        .add_item(
            Item::new(1, dec!(349.90))
                .unwrap()
                .with_description("Učebnice")
                .with_unit("ks")
                .with_tax(12)
                .unwrap(),
        )
        .build()
        .expect("invoice should be valid");

    let labels = invoice.labels();
    println!("{} {}", invoice.title, invoice.number);
    for line in invoice.client().address_lines(labels) {
        println!("  {line}");
    }
    println!("---");
    for item in invoice.items() {
        println!(
            "  {} {} {} @ {} = {}",
            item.count(),
            item.unit(),
            item.description(),
            item.price(),
            item.total()
        );
    }
    println!("---");
    for (rate, net, gross, tax) in invoice.generate_breakdown_vat_table() {
        println!("  {rate:>3} %  net {net}  tax {tax}  gross {gross}");
    }
    println!("Net:      {} {}", invoice.price(), invoice.currency);
    println!("Gross:    {} {}", invoice.price_tax(), invoice.currency);
    println!("Rounding: {} {}", invoice.difference_in_rounding(), invoice.currency);
    println!("Due:      {} {}", invoice.amount_due(), invoice.currency);

    let mut code = PaymentCodeBuilder::new(&invoice).expect("payment code");
    println!("QR text:  {}", code.text());
    match code.filename() {
        Ok(path) => println!("QR image: {}", path.display()),
        Err(e) => eprintln!("QR image failed: {e}"),
    }
    if let Err(e) = code.destroy() {
        eprintln!("cleanup failed: {e}");
    }
}
