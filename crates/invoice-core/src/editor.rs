//! # Editor Actions
//!
//! Every change the editor can make to a draft, expressed as a value.
//!
//! ## Snapshot Flow
//! ```text
//! ┌──────────┐   InvoiceEdit   ┌──────────────┐   ┌──────────────┐
//! │ snapshot │ ──────────────► │ apply(&edit) │──►│ new snapshot │──► persist
//! │   (n)    │                 └──────────────┘   │    (n+1)     │
//! └──────────┘                                    └──────────────┘
//!       ▲ unchanged, still valid
//! ```
//!
//! [`Invoice::apply`] never mutates its receiver. An edit that names an
//! unknown line item or an out-of-range term index yields a snapshot equal
//! to the input. GSTINs are upper-cased on the way in.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient::finite_or_zero;
use crate::types::{Invoice, LineItem, Party, Product, SaleType, SavedCustomer};

// =============================================================================
// Patches
// =============================================================================

/// Partial update of a line item. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct LineItemPatch {
    pub description: Option<String>,
    pub hsn_code: Option<String>,
    #[serde(rename = "gstRate")]
    pub gst_rate_percent: Option<f64>,
    #[serde(rename = "itemRate")]
    pub unit_rate: Option<f64>,
    #[serde(rename = "qty")]
    pub quantity: Option<f64>,
}

impl LineItemPatch {
    fn apply_to(&self, item: &mut LineItem) {
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(hsn_code) = &self.hsn_code {
            item.hsn_code = hsn_code.clone();
        }
        if let Some(gst) = self.gst_rate_percent {
            item.gst_rate_percent = finite_or_zero(gst);
        }
        if let Some(rate) = self.unit_rate {
            item.unit_rate = finite_or_zero(rate);
        }
        if let Some(quantity) = self.quantity {
            item.quantity = finite_or_zero(quantity);
        }
    }
}

/// Partial update of the company identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub gstin: Option<String>,
    pub logo: Option<String>,
    pub signature: Option<String>,
}

/// Partial update of the bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct BankPatch {
    pub bank_name: Option<String>,
    pub account_holder: Option<String>,
    pub account_no: Option<String>,
    pub account_type: Option<String>,
    pub ifsc: Option<String>,
    pub branch: Option<String>,
    pub upi_id: Option<String>,
}

/// Which party block a saved customer is copied into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PartyRole {
    Billing,
    Shipping,
}

// =============================================================================
// Invoice Edit
// =============================================================================

/// One editor action.
///
/// Serialized with an `action` tag so the web editor can send
/// `{ "action": "setDiscount", "amount": 50 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "camelCase")]
#[ts(export)]
pub enum InvoiceEdit {
    SetInvoiceNo { value: String },
    SetDate { value: String },
    SetPoNo { value: String },
    SetVehicleNo { value: String },
    SetSaleType {
        #[serde(rename = "saleType")]
        sale_type: SaleType,
    },
    SetDiscount { amount: f64 },
    SetFreightCharges { amount: f64 },

    /// Appends a line copied from a catalog product, quantity 1.
    AddProductItem { product: Product },
    /// Appends a blank hand-entered line, quantity 1.
    AddManualItem,
    UpdateItem { id: String, patch: LineItemPatch },
    RemoveItem { id: String },

    SetBillingParty { party: Party },
    SetShippingParty { party: Party },
    ApplySavedCustomer { customer: SavedCustomer, role: PartyRole },
    CopyBillingToShipping,

    PatchCompany { patch: CompanyPatch },
    PatchBank { patch: BankPatch },

    UpdateTerm { index: usize, text: String },
    /// Appends an empty term.
    AddTerm,
    /// Inserts an empty term right after `index`.
    InsertTermAfter { index: usize },
    RemoveTerm { index: usize },

    SetLogo { value: String },
    SetSignature { value: String },
    SetQrCode { value: String },
}

impl Invoice {
    /// Returns the snapshot that results from applying `edit`.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::{Invoice, InvoiceEdit};
    ///
    /// let before = Invoice::default();
    /// let after = before.apply(&InvoiceEdit::AddManualItem);
    ///
    /// assert!(before.items.is_empty());
    /// assert_eq!(after.items.len(), 1);
    /// assert_eq!(after.items[0].product_ref, "manual");
    /// ```
    pub fn apply(&self, edit: &InvoiceEdit) -> Invoice {
        let mut next = self.clone();

        match edit {
            InvoiceEdit::SetInvoiceNo { value } => next.invoice_no = value.clone(),
            InvoiceEdit::SetDate { value } => next.date = value.clone(),
            InvoiceEdit::SetPoNo { value } => next.po_no = value.clone(),
            InvoiceEdit::SetVehicleNo { value } => next.vehicle_no = value.clone(),
            InvoiceEdit::SetSaleType { sale_type } => next.sale_type = *sale_type,
            InvoiceEdit::SetDiscount { amount } => {
                next.adjustments.discount = finite_or_zero(*amount)
            }
            InvoiceEdit::SetFreightCharges { amount } => {
                next.adjustments.freight_charges = finite_or_zero(*amount)
            }

            InvoiceEdit::AddProductItem { product } => {
                next.items.push(LineItem::from_product(product))
            }
            InvoiceEdit::AddManualItem => next.items.push(LineItem::manual()),
            InvoiceEdit::UpdateItem { id, patch } => {
                if let Some(item) = next.items.iter_mut().find(|item| &item.id == id) {
                    patch.apply_to(item);
                }
            }
            InvoiceEdit::RemoveItem { id } => next.items.retain(|item| &item.id != id),

            InvoiceEdit::SetBillingParty { party } => next.billing_address = with_upper_gstin(party),
            InvoiceEdit::SetShippingParty { party } => {
                next.shipping_address = with_upper_gstin(party)
            }
            InvoiceEdit::ApplySavedCustomer { customer, role } => {
                let party = customer.party();
                match role {
                    PartyRole::Billing => next.billing_address = party,
                    PartyRole::Shipping => next.shipping_address = party,
                }
            }
            InvoiceEdit::CopyBillingToShipping => {
                next.shipping_address = next.billing_address.clone()
            }

            InvoiceEdit::PatchCompany { patch } => {
                let company = &mut next.company_details;
                set(&mut company.name, &patch.name);
                set(&mut company.address, &patch.address);
                set(&mut company.contact, &patch.contact);
                if let Some(mobile) = &patch.mobile_number {
                    company.mobile_number = Some(mobile.clone());
                }
                set(&mut company.email, &patch.email);
                set(&mut company.website, &patch.website);
                if let Some(gstin) = &patch.gstin {
                    company.gstin = gstin.to_uppercase();
                }
                set(&mut company.logo, &patch.logo);
                set(&mut company.signature, &patch.signature);
            }
            InvoiceEdit::PatchBank { patch } => {
                let bank = &mut next.bank_details;
                set(&mut bank.bank_name, &patch.bank_name);
                set(&mut bank.account_holder, &patch.account_holder);
                set(&mut bank.account_no, &patch.account_no);
                if let Some(account_type) = &patch.account_type {
                    bank.account_type = Some(account_type.clone());
                }
                set(&mut bank.ifsc, &patch.ifsc);
                set(&mut bank.branch, &patch.branch);
                if let Some(upi_id) = &patch.upi_id {
                    bank.upi_id = Some(upi_id.clone());
                }
            }

            InvoiceEdit::UpdateTerm { index, text } => {
                if let Some(term) = next.terms.get_mut(*index) {
                    *term = text.clone();
                }
            }
            InvoiceEdit::AddTerm => next.terms.push(String::new()),
            InvoiceEdit::InsertTermAfter { index } => {
                if *index < next.terms.len() {
                    next.terms.insert(index + 1, String::new());
                }
            }
            InvoiceEdit::RemoveTerm { index } => {
                if *index < next.terms.len() {
                    next.terms.remove(*index);
                }
            }

            InvoiceEdit::SetLogo { value } => next.logo = value.clone(),
            InvoiceEdit::SetSignature { value } => next.signature = value.clone(),
            InvoiceEdit::SetQrCode { value } => next.qr_code = value.clone(),
        }

        next
    }
}

fn set(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *field = value.clone();
    }
}

fn with_upper_gstin(party: &Party) -> Party {
    Party {
        gstin: party.gstin.to_uppercase(),
        ..party.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use serde_json::json;

    fn with_two_items() -> Invoice {
        let catalog = defaults::master_products();
        Invoice::default()
            .apply(&InvoiceEdit::AddProductItem {
                product: catalog[0].clone(),
            })
            .apply(&InvoiceEdit::AddManualItem)
    }

    #[test]
    fn test_add_items() {
        let invoice = with_two_items();
        assert_eq!(invoice.items.len(), 2);
        assert_eq!(invoice.items[0].description, "ACRID (250 ml)");
        assert_eq!(invoice.items[0].unit_rate, 200.0);
        assert_eq!(invoice.items[0].quantity, 1.0);
        assert_eq!(invoice.items[1].product_ref, "manual");
        assert_eq!(invoice.items[1].quantity, 1.0);
        assert_ne!(invoice.items[0].id, invoice.items[1].id);
    }

    #[test]
    fn test_apply_leaves_prior_snapshot_untouched() {
        let before = with_two_items();
        let after = before.apply(&InvoiceEdit::SetDiscount { amount: 25.0 });
        assert_eq!(before.adjustments.discount, 0.0);
        assert_eq!(after.adjustments.discount, 25.0);
    }

    #[test]
    fn test_update_item_patches_only_given_fields() {
        let invoice = with_two_items();
        let id = invoice.items[0].id.clone();
        let next = invoice.apply(&InvoiceEdit::UpdateItem {
            id,
            patch: LineItemPatch {
                quantity: Some(3.0),
                ..LineItemPatch::default()
            },
        });
        assert_eq!(next.items[0].quantity, 3.0);
        assert_eq!(next.items[0].unit_rate, 200.0);
        assert_eq!(next.totals().taxable_total.value(), 600.0);
    }

    #[test]
    fn test_unknown_item_id_is_a_no_op() {
        let invoice = with_two_items();
        let patched = invoice.apply(&InvoiceEdit::UpdateItem {
            id: "missing".to_string(),
            patch: LineItemPatch {
                quantity: Some(9.0),
                ..LineItemPatch::default()
            },
        });
        let removed = invoice.apply(&InvoiceEdit::RemoveItem {
            id: "missing".to_string(),
        });
        assert_eq!(patched, invoice);
        assert_eq!(removed, invoice);
    }

    #[test]
    fn test_remove_item() {
        let invoice = with_two_items();
        let id = invoice.items[0].id.clone();
        let next = invoice.apply(&InvoiceEdit::RemoveItem { id });
        assert_eq!(next.items.len(), 1);
        assert_eq!(next.items[0].product_ref, "manual");
    }

    #[test]
    fn test_parties() {
        let customer = SavedCustomer {
            id: "c1".to_string(),
            name: "Ravi Agro".to_string(),
            address: "Siddipet".to_string(),
            phone: "9848012345".to_string(),
            gstin: "36ABCDE1234F1Z5".to_string(),
        };
        let invoice = Invoice::default()
            .apply(&InvoiceEdit::ApplySavedCustomer {
                customer: customer.clone(),
                role: PartyRole::Billing,
            })
            .apply(&InvoiceEdit::CopyBillingToShipping);
        assert_eq!(invoice.billing_address, customer.party());
        assert_eq!(invoice.shipping_address, customer.party());

        let invoice = invoice.apply(&InvoiceEdit::SetShippingParty {
            party: Party {
                name: "Depot".to_string(),
                gstin: "36xyz".to_string(),
                ..Party::default()
            },
        });
        assert_eq!(invoice.shipping_address.gstin, "36XYZ");
        assert_eq!(invoice.billing_address.name, "Ravi Agro");
    }

    #[test]
    fn test_patch_company_and_bank() {
        let invoice = Invoice::default()
            .apply(&InvoiceEdit::PatchCompany {
                patch: CompanyPatch {
                    gstin: Some("36adcpc3276h2zr".to_string()),
                    ..CompanyPatch::default()
                },
            })
            .apply(&InvoiceEdit::PatchBank {
                patch: BankPatch {
                    branch: Some("Kukatpally".to_string()),
                    ..BankPatch::default()
                },
            });
        assert_eq!(invoice.company_details.gstin, "36ADCPC3276H2ZR");
        assert_eq!(invoice.company_details.name, "SRI KRISHNAA ENTERPRISES");
        assert_eq!(invoice.bank_details.branch, "Kukatpally");
        assert_eq!(invoice.bank_details.ifsc, "SYNB0003318");
    }

    #[test]
    fn test_term_edits() {
        let invoice = Invoice::default();
        assert_eq!(invoice.terms.len(), 4);

        let added = invoice.apply(&InvoiceEdit::AddTerm);
        assert_eq!(added.terms.len(), 5);
        assert_eq!(added.terms[4], "");

        let inserted = invoice.apply(&InvoiceEdit::InsertTermAfter { index: 0 });
        assert_eq!(inserted.terms[1], "");
        assert_eq!(inserted.terms[2], invoice.terms[1]);

        let updated = invoice.apply(&InvoiceEdit::UpdateTerm {
            index: 3,
            text: "Subject to Siddipet Jurisdiction only.".to_string(),
        });
        assert_eq!(updated.terms[3], "Subject to Siddipet Jurisdiction only.");

        let removed = invoice.apply(&InvoiceEdit::RemoveTerm { index: 0 });
        assert_eq!(removed.terms.len(), 3);
        assert_eq!(removed.terms[0], invoice.terms[1]);
    }

    #[test]
    fn test_out_of_range_term_index_is_a_no_op() {
        let invoice = Invoice::default();
        for edit in [
            InvoiceEdit::UpdateTerm {
                index: 10,
                text: "x".to_string(),
            },
            InvoiceEdit::InsertTermAfter { index: 4 },
            InvoiceEdit::RemoveTerm { index: 4 },
        ] {
            assert_eq!(invoice.apply(&edit), invoice);
        }
    }

    #[test]
    fn test_non_finite_amounts_become_zero() {
        let invoice = Invoice::default().apply(&InvoiceEdit::SetFreightCharges { amount: f64::NAN });
        assert_eq!(invoice.adjustments.freight_charges, 0.0);
    }

    #[test]
    fn test_edit_wire_format() {
        let edit: InvoiceEdit =
            serde_json::from_value(json!({ "action": "setDiscount", "amount": 50.0 })).unwrap();
        assert_eq!(edit, InvoiceEdit::SetDiscount { amount: 50.0 });

        let edit: InvoiceEdit = serde_json::from_value(json!({
            "action": "updateItem",
            "id": "a1",
            "patch": { "qty": 4 }
        }))
        .unwrap();
        assert_eq!(
            edit,
            InvoiceEdit::UpdateItem {
                id: "a1".to_string(),
                patch: LineItemPatch {
                    quantity: Some(4.0),
                    ..LineItemPatch::default()
                },
            }
        );

        let edit: InvoiceEdit = serde_json::from_value(json!({
            "action": "setSaleType",
            "saleType": "Central"
        }))
        .unwrap();
        assert_eq!(
            edit,
            InvoiceEdit::SetSaleType {
                sale_type: SaleType::Central
            }
        );
    }
}
