#![no_main]

use fakturace::payment::PaymentPayload;
use fakturace::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = s.splitn(4, '|');
    let account = parts.next().unwrap_or_default();
    let symbol = parts.next().unwrap_or_default();
    let currency = parts.next().unwrap_or_default();
    let price = parts.next().unwrap_or_default();

    let provider = AddressBuilder::provider("Fuzz").bank_account(account, "").build();
    let Ok(mut invoice) = InvoiceBuilder::new(Address::client("Fuzz"), provider, Creator::new("Fuzz"))
        .variable_symbol(symbol)
        .currency(currency)
        .build()
    else {
        return;
    };
    if let Ok(item) = Item::new(1, price) {
        invoice.add_item(item);
    }
    if let Ok(payload) = PaymentPayload::from_invoice(&invoice) {
        // Anything accepted once must encode again.
        assert!(payload.encode().is_ok());
    }
});
