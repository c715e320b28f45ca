// MX record lookups for the MxEmail check

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::Resolver;
use std::error::Error;
use std::time::Duration;

/// Count the MX records for a domain, bounded by the given timeout.
///
/// Every resolver failure (NXDOMAIN, timeout, transport error, resolver
/// construction) comes back as an error; the caller translates it into a
/// single validation failure reason and never retries.
pub(crate) fn lookup(domain: &str, timeout: Duration) -> Result<usize, Box<dyn Error>> {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;

    let resolver = Resolver::new(ResolverConfig::default(), opts)?;
    let records = resolver.mx_lookup(domain)?;
    let count = records.iter().count();

    log::debug!("mx lookup for {} returned {} records", domain, count);
    Ok(count)
}
