use mesh64_domain::{ForwarderTable, StaticHosts};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

fn table() -> ForwarderTable {
    let mut forwarders = BTreeMap::new();
    forwarders.insert("lan".to_string(), "192.168.1.1:53".to_string());
    forwarders.insert("corp.example".to_string(), "10.0.0.53:53".to_string());
    ForwarderTable::new(&forwarders, "1.1.1.1:53")
}

#[test]
fn test_forwarder_matches_suffix() {
    let table = table();
    assert_eq!(&*table.resolve("printer.lan."), "192.168.1.1:53");
    assert_eq!(&*table.resolve("git.corp.example."), "10.0.0.53:53");
}

#[test]
fn test_forwarder_is_case_insensitive() {
    let table = table();
    assert_eq!(&*table.resolve("PRINTER.LAN."), "192.168.1.1:53");
    assert_eq!(&*table.resolve("Git.Corp.Example."), "10.0.0.53:53");
}

#[test]
fn test_forwarder_falls_back_to_default() {
    let table = table();
    assert_eq!(&*table.resolve("example.org."), "1.1.1.1:53");
    assert_eq!(&*table.resolve("lan.example.org."), "1.1.1.1:53");
    assert_eq!(table.default_server(), "1.1.1.1:53");
}

#[test]
fn test_forwarder_requires_fqdn_form() {
    let table = table();
    assert_eq!(&*table.resolve("printer.lan"), "1.1.1.1:53");
}

#[test]
fn test_empty_forwarder_table_uses_default() {
    let table = ForwarderTable::new(&BTreeMap::new(), "9.9.9.9:53");
    assert!(table.is_empty());
    assert_eq!(&*table.resolve("anything.example."), "9.9.9.9:53");
}

#[test]
fn test_static_hosts_exact_match_only() {
    let mut entries = BTreeMap::new();
    entries.insert("Router.LAN".to_string(), Ipv4Addr::new(192, 168, 1, 1));
    let hosts = StaticHosts::new(&entries);

    assert_eq!(hosts.lookup("router.lan."), Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(hosts.lookup("ROUTER.lan."), Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(hosts.lookup("www.router.lan."), None);
    assert_eq!(hosts.lookup("lan."), None);
}
