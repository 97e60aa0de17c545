use anyhow::Result;
use std::sync::Arc;

use adminpanel_core::VendorForm;

use crate::cli::VendorArgs;
use crate::commands::{report, Context};

pub async fn create_vendor(ctx: &Context, args: VendorArgs) -> Result<()> {
    let mut form = VendorForm::new(Arc::clone(&ctx.api));
    for (field, value) in args.fields() {
        form.set_field(field, value);
    }
    let result = form.submit().await;
    report(form.status(), result)
}
