//! # Built-in Defaults
//!
//! The records a fresh install starts with: issuing company, bank account,
//! standard terms and the master product catalog.
//!
//! Persisted state always wins over these; they only fill gaps (missing
//! fields, missing keys, corrupt records).

use crate::types::{BankDetails, CompanyDetails, Product, SavedCustomer};

/// The issuing company printed in the invoice header.
pub fn company_details() -> CompanyDetails {
    CompanyDetails {
        name: "SRI KRISHNAA ENTERPRISES".to_string(),
        address: "Plot #98-100, Ramachandra Residency, Srinivasa Nagar colony, Nizampet Village, Hyderabad, Telangana - 500090".to_string(),
        contact: "8121522223".to_string(),
        mobile_number: Some("8121522223".to_string()),
        email: "ske.co.in@gmail.com".to_string(),
        website: "organick.in".to_string(),
        gstin: "36ADCPC3276H2ZR".to_string(),
        logo: "https://i.ibb.co/cftc0v5/SKE-LOGO.png".to_string(),
        signature: "https://i.ibb.co/0V29STNH/Sign-Pratap.png".to_string(),
    }
}

/// The account printed in the payment block.
pub fn bank_details() -> BankDetails {
    BankDetails {
        bank_name: "Syndicate Bank".to_string(),
        account_holder: "SRI KRISHNAA ENTERPRISES".to_string(),
        account_no: "33183070000301".to_string(),
        account_type: Some("Current Account".to_string()),
        ifsc: "SYNB0003318".to_string(),
        branch: "Pragathi Nagar, Hyderabad".to_string(),
        upi_id: Some("skenterprises@upi".to_string()),
    }
}

/// Standard terms & conditions for a new draft.
pub fn default_terms() -> Vec<String> {
    [
        "Goods once sold will not be taken back.",
        "Interest @ 18% p.a. will be charged if payment is not made within 15 days.",
        "Discrepancy must be reported within 3 days of delivery.",
        "Subject to Hyderabad Jurisdiction only.",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

/// Address book on first run.
pub fn saved_customers() -> Vec<SavedCustomer> {
    Vec::new()
}

fn product(id: &str, name: &str, hsn_code: &str, rate: f64, gst_rate: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        hsn_code: hsn_code.to_string(),
        rate,
        gst_rate,
    }
}

/// Master product catalog on first run.
pub fn master_products() -> Vec<Product> {
    vec![
        product("1", "ACRID (250 ml)", "3808:9910", 200.0, 18.0),
        product("2", "ACRID (500 ml)", "3808:9910", 350.0, 18.0),
        product("3", "BHU-MITRA (5 Lt)", "3101:0099", 700.0, 5.0),
        product("4", "BHU-MITRA (10 Lt)", "3101:0099", 1250.0, 5.0),
        product("5", "BHU-MITRA (20 Lt)", "3101:0099", 4285.72, 5.0),
        product("6", "BHU-MITRA-I", "3101:0099", 166.67, 5.0),
        product("7", "BLUME (1 Lt)", "3808:9340", 466.11, 18.0),
        product("8", "CALLUS - D (1 Lt)", "3808:9340", 250.0, 18.0),
        product("9", "CALLUS - F (250 Ml)", "3808:9340", 238.1, 5.0),
        product("10", "CALLUS - F (1 Lt)", "3808:9340", 310.0, 18.0),
        product("11", "BHU-AMRUT (10Lt)", "3101:0099", 1095.24, 5.0),
        product("12", "CALLUS-D (5 Lt)", "3808:9340", 2712.0, 18.0),
        product("13", "CANOPY- F (250 gm)", "3808:9290", 254.24, 18.0),
        product("14", "CANOPY - F (500 gm)", "3808:9290", 650.0, 18.0),
        product("15", "CALLUS-F( 250ml)", "3808:9340", 90.0, 18.0),
        product("16", "CLEAR DRIP (1 Lt)", "3808:9340", 310.0, 18.0),
        product("17", "BHU-MITRA (1 Lt)", "3101:0099", 190.48, 5.0),
        product("18", "GENIMEN (1 Lt)", "3808:9340", 508.48, 18.0),
        product("19", "SEA-MAX250ml", "3101:0099", 238.1, 5.0),
        product("20", "GLOSIL (500 Ml)", "3104:9090", 523.81, 5.0),
        product("21", "GLOSIL (1 Lt)", "3104:9090", 250.0, 18.0),
        product("22", "KRISIL (100 ml)", "3824:9017", 122.8, 18.0),
        product("23", "KRISIL (250 ml)", "3824:9017", 275.0, 18.0),
        product("24", "KRISIL (500 ml)", "3824:9017", 636.0, 18.0),
        product("25", "KRRISH-DOWNY (500 ml)", "3808:9910", 300.0, 5.0),
        product("26", "KRRISH-DOWNY (1 Lt)", "3808:9910", 575.0, 5.0),
        product("27", "SEA-MAX 500ml", "3101:0099", 165.0, 5.0),
        product("28", "GENIMEN (500 ml)", "3808:9340", 165.0, 18.0),
        product("29", "CANOPY- F (150 Gm)", "3808:9290", 169.5, 18.0),
        product("30", "BHU-AMRUT 5 Lt", "3101:0099", 500.0, 5.0),
        product("31", "RETRO - VIR (250 gm)", "3808:9290", 225.0, 18.0),
        product("32", "RETRO - VIR (500 gm)", "3808:9290", 932.21, 18.0),
        product("33", "BHU-AMRUT 20Lt", "3808:9340", 1800.0, 5.0),
        product("34", "SHIELD - S (250 ml)", "3808:9910", 275.0, 5.0),
        product("35", "SHIELD - S (500 ml)", "3808:9910", 847.0, 5.0),
        product("36", "SHIELD - S (1 Lt)", "3808:9910", 600.0, 5.0),
        product("37", "ULTRA LEGEND (250 ml)", "1515:9020", 200.0, 5.0),
        product("38", "ULTRA LEGEND (500 ml)", "1515:9020", 400.0, 5.0),
        product("39", "BLUME 500 ml", "3808:9340", 275.43, 18.0),
        product("40", "SEA-MAX (1Lt)", "3808:9340", 428.58, 5.0),
        product("41", "KRISH ZYME (30 Kgs)", "3101:0099", 2571.0, 5.0),
        product("42", "WONDER - 17 (250 ml)", "", 211.87, 18.0),
    ]
}
