//! AMZL-02-740600: hosts using DNS resolution must configure at least two
//! name servers; hosts resolving locally must keep the resolver file empty;
//! either way the resolver file must be immutable.

use crate::check::{Branch, Check, ConfigSource, Subject};
use crate::config::Settings;
use crate::control::{Applicability, BranchGate, Control, ControlTags, Severity};
use crate::matcher::Matcher;
use crate::parser::{ParseOptions, Separator};

/// Immutable flag must sit inside the flags field (first token of the
/// attribute listing), not anywhere in the printed file path.
const IMMUTABLE_FLAG_PATTERN: &str = r"^\S*i";

#[must_use]
pub fn dns_resolution_control(settings: &Settings) -> Control {
    let nsswitch = ConfigSource::new(
        settings.paths.nsswitch.clone(),
        ParseOptions::new()
            .with_comment_char('#')
            .with_separator(Separator::Char(':')),
    );
    let resolv = ConfigSource::new(
        settings.paths.resolv.clone(),
        ParseOptions::new().with_comment_char('#'),
    );

    let mut attr_args = settings.command.attr_args.clone();
    attr_args.push(settings.paths.resolv.display().to_string());

    Control {
        id: "AMZL-02-740600".to_string(),
        title: "Systems using DNS resolution must have at least two name servers configured"
            .to_string(),
        description: "Name resolution backs security functions such as time \
            synchronization, centralized authentication, and remote logging. \
            A single name server is a single point of failure for all of them, \
            so DNS-resolving hosts must configure redundant servers."
            .to_string(),
        check_text: "Run `grep hosts /etc/nsswitch.conf`. If the hosts line does \
            not list dns, /etc/resolv.conf must be empty. Otherwise run \
            `grep nameserver /etc/resolv.conf` and verify at least two \
            uncommented nameserver lines. In both cases `lsattr /etc/resolv.conf` \
            must show the immutable (i) attribute."
            .to_string(),
        fix_text: "For DNS resolution, add two or more nameserver lines to \
            /etc/resolv.conf (on EC2, via a custom DHCP option set). For local \
            resolution, truncate the file with `echo -n > /etc/resolv.conf`. \
            Then make it immutable: `chattr +i /etc/resolv.conf`."
            .to_string(),
        impact: 0.3,
        severity: Severity::Low,
        tags: ControlTags {
            srg_id: Some("SRG-OS-000480-GPOS-00227".to_string()),
            stig_id: Some("AMZL-02-740600".to_string()),
            cci: vec!["CCI-000366".to_string()],
            nist: vec!["CM-6 b".to_string()],
            subsystems: vec!["dns".to_string(), "resolv".to_string()],
        },
        applicability: vec![Applicability::Host, Applicability::Container],
        gate: Some(BranchGate {
            description: "hosts line in nsswitch.conf lists dns".to_string(),
            subject: Subject::Tokens {
                source: nsswitch.clone(),
                key: "hosts".to_string(),
            },
            matcher: Matcher::Includes("dns".to_string()),
        }),
        checks: vec![
            Check::new(
                "hosts entry does not enable dns resolution",
                Subject::HasToken {
                    source: nsswitch,
                    key: "hosts".to_string(),
                    token: "dns".to_string(),
                },
                Matcher::IsFalse,
            )
            .on_branch(Branch::Local),
            Check::new(
                "resolver configuration is empty under local resolution",
                Subject::Document(resolv.clone()),
                Matcher::IsEmpty,
            )
            .on_branch(Branch::Local),
            Check::new(
                "nameserver entries are present",
                Subject::Values {
                    source: resolv.clone(),
                    key: "nameserver".to_string(),
                },
                Matcher::IsEmpty,
            )
            .negated()
            .on_branch(Branch::Dns),
            Check::new(
                "at least two distinct nameservers are configured",
                Subject::ValueCount {
                    source: resolv,
                    key: "nameserver".to_string(),
                    distinct: true,
                },
                Matcher::AtLeast(2),
            )
            .on_branch(Branch::Dns),
            Check::new(
                "resolver file carries the immutable attribute",
                Subject::CommandStdout {
                    program: settings.command.attr_program.clone(),
                    args: attr_args,
                },
                Matcher::MatchesPattern(IMMUTABLE_FLAG_PATTERN.to_string()),
            ),
        ],
    }
}

#[cfg(test)]
#[path = "dns_resolution_tests.rs"]
mod tests;
