pub fn format_error_details(e: &anyhow::Error) -> String {
    // Get the full error chain
    let error_chain = e.chain().collect::<Vec<_>>();
    let mut result = format!("{}\n", e);
    result.push_str("Error chain:\n");

    // Track seen messages to avoid duplication
    let mut seen_messages = std::collections::HashSet::new();
    seen_messages.insert(e.to_string());

    for (i, err) in error_chain.iter().enumerate().skip(1) {
        let err_msg = err.to_string();
        if seen_messages.insert(err_msg.clone()) {
            result.push_str(&format!("  [{}] {}\n", i, err_msg));
        }
    }
    result
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
