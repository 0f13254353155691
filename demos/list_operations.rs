//! Print the operation registry: id, method, and path template.
//!
//! Run: `cargo run --example list_operations`

use ibp_client::IbpClient;

fn main() {
    let operations = IbpClient::operations();

    let (id_width, method_width) =
        operations
            .iter()
            .fold((0usize, 0usize), |(id_max, method_max), operation| {
                (
                    id_max.max(operation.operation_id.len()),
                    method_max.max(operation.method.len()),
                )
            });

    for operation in operations {
        println!(
            "{:<id_width$}  {:<method_width$}  {}",
            operation.operation_id, operation.method, operation.path_template
        );
    }
}
