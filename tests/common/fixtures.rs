//! Static timestamp corpora and API response bodies used across harnesses.
//!
//! Response bodies follow the backend's envelope shape exactly, including the
//! naive `isoformat()` timestamps with microsecond precision and the process
//! columns the backend stores as text (`"0.0"`, `"None"`).

/// Timestamps that parse, paired with their UTC rendering.
pub const CORPUS_VALID: &[(&str, &str)] = &[
    ("2024-03-15T12:30:45.000Z", "15.03.2024, 12:30:45"),
    ("2024-03-15T12:30:45.123456Z", "15.03.2024, 12:30:45"),
    ("2024-03-15T12:30:45.123456", "15.03.2024, 12:30:45"),
    ("2024-03-15T12:30:45", "15.03.2024, 12:30:45"),
    ("2024-03-15 12:30:45.5", "15.03.2024, 12:30:45"),
    ("2024-03-15T15:30:45+03:00", "15.03.2024, 12:30:45"),
    ("2024-03-15T15:30:45.999999+0300", "15.03.2024, 12:30:45"),
    ("2024-03-15T12:30", "15.03.2024, 12:30:00"),
    ("2024-03-15", "15.03.2024, 00:00:00"),
    ("2024-01-01T00:30:00+01:00", "31.12.2023, 23:30:00"),
    ("  2024-03-15T12:30:45Z  ", "15.03.2024, 12:30:45"),
];

/// Strings that must be echoed back untouched.
pub const CORPUS_INVALID: &[&str] = &[
    "hello world",
    "not-a-timestamp",
    "99999-99-99",
    "2024-13-01T00:00:00",
    "2024-02-30",
    "15.03.2024, 12:30:45",
    "Mar 15 12:30:45",
    "1710505845",
    "2024-03-15T12:30:45.1234567 UTC",
    " ",
];

pub const ALERTS_BODY: &str = r#"{
  "status": "success",
  "success": true,
  "message": "OK",
  "data": [
    {"id": 42, "timestamp": "2024-03-15T22:05:11.482913", "rule_name": "SSH_BRUTEFORCE",
     "severity": "HIGH", "message": "12 failed logins for root from 203.0.113.7", "log_event_id": 901},
    {"id": 41, "timestamp": null, "rule_name": "CRON_PERSISTENCE",
     "severity": "MEDIUM", "message": "crontab modified by www-data", "log_event_id": null}
  ]
}"#;

pub const LOGS_BODY: &str = r#"{
  "status": "success",
  "success": true,
  "message": "OK",
  "data": [
    {"id": 901, "timestamp": "2024-03-15T22:05:10.000123", "log_source": "auth.log",
     "event_type": "SSH_FAILED", "category": "auth", "severity": "WARNING",
     "message": "Failed password for root from 203.0.113.7", "raw_log": "sshd[811]: Failed password",
     "user": "root", "ip_address": "203.0.113.7", "process_name": "sshd", "rule_triggered": null},
    {"id": 900, "timestamp": "garbled", "event_type": "UFW_BLOCK", "severity": "INFO",
     "message": "blocked"}
  ]
}"#;

pub const NETWORK_BODY: &str = r#"{
  "success": true,
  "data": [
    {"id": 7, "timestamp": "2024-03-15T08:00:00.5", "event_type": "CONNECTION_OPENED",
     "pid": 811, "process_name": "sshd", "protocol": "tcp", "laddr_ip": "0.0.0.0", "laddr_port": 22,
     "raddr_ip": "203.0.113.7", "raddr_port": 51234, "status": "ESTABLISHED"},
    {"id": 8, "timestamp": "2024-03-15T08:00:01", "event_type": "CONNECTION_CLOSED",
     "pid": null, "process_name": null}
  ]
}"#;

pub const PROCESSES_BODY: &str = r#"{
  "success": true,
  "data": [
    {"id": 3, "timestamp": "2024-03-15T09:15:00.250000", "event_type": "PROCESS_STARTED",
     "pid": 4242, "ppid": 1, "process_name": "nc", "exe": "/usr/bin/nc", "cmdline": "nc -lvp 4444",
     "username": "www-data", "create_time": "1710494100.25", "cpu_percent": "0.0",
     "memory_rss": "1048576", "memory_vms": "None", "old_value": "None", "new_value": "None",
     "exe_deleted": null, "snapshot_data": {"pid": 4242, "name": "nc"}, "alert_id": null,
     "raw_event": {"pid": 4242, "name": "nc"}}
  ]
}"#;

/// A single process event as `/api/process/events/<id>` serves it.
pub const PROCESS_DETAIL_BODY: &str = r#"{
  "status": "success",
  "success": true,
  "message": "OK",
  "data": {"id": 3, "timestamp": "2024-03-15T09:15:00.250000", "event_type": "PROCESS_STARTED",
           "pid": 4242, "ppid": 1, "process_name": "nc", "exe": "/usr/bin/nc",
           "cmdline": "nc -lvp 4444", "username": "www-data", "create_time": "1710494100.25",
           "cpu_percent": "None", "memory_rss": "1048576", "memory_vms": "None",
           "old_value": "None", "new_value": "None", "exe_deleted": "false",
           "snapshot_data": {"pid": 4242}, "alert_id": null, "raw_event": {"pid": 4242}}
}"#;

pub const ACTIVE_PROCESSES_BODY: &str = r#"{
  "success": true,
  "data": [
    {"pid": 1, "name": "systemd", "cmdline": "/sbin/init", "cpu": 0.0, "mem": 0.31, "username": "root"},
    {"pid": 4242, "name": "nc", "cmdline": "nc -lvp 4444", "cpu": 1.26, "mem": 0.02, "username": "www-data"}
  ]
}"#;

pub const CONNECTIONS_BODY: &str = r#"{
  "success": true,
  "data": [
    {"pid": 811, "process_name": "sshd", "protocol": "tcp", "laddr_ip": "0.0.0.0", "laddr_port": 22,
     "raddr_ip": null, "raddr_port": null, "status": "LISTEN"},
    {"pid": null, "process_name": "unknown", "protocol": "udp", "laddr_ip": "127.0.0.53",
     "laddr_port": 53, "raddr_ip": null, "raddr_port": null, "status": "NONE"}
  ]
}"#;

pub const STATUS_BODY: &str = r#"{
  "status": "success",
  "success": true,
  "message": "OK",
  "data": {"hids_uptime_seconds": 3725, "system_uptime_seconds": 274320, "cpu_percent": 12.5,
           "memory_percent": 40.1, "memory_used_mb": 812.34, "memory_total_mb": 2048.0,
           "process_count": 143, "scheduler_threads": {"thread_0": true, "thread_1": true}}
}"#;

pub const THREADS_BODY: &str = r#"{
  "success": true,
  "data": [
    {"name": "MainThread", "alive": true, "last_heartbeat": "N/A"},
    {"name": "LogCollector", "alive": true, "last_heartbeat": "2024-03-15 12:00:05"}
  ]
}"#;

pub const INTERNAL_LOG_BODY: &str = r#"{
  "success": true,
  "data": "2024-03-15 12:00:00 INFO scheduler started\n\n2024-03-15 12:00:05 ERROR collector crashed\n"
}"#;

pub const NO_SNAPSHOT_BODY: &str =
    r#"{"status": "success", "success": true, "message": "No metric snapshots recorded yet.", "data": null}"#;

pub const METRICS_BODY: &str = r#"{
  "success": true,
  "data": [
    {"id": 1, "timestamp": "2024-03-15T12:00:00.000001", "snapshot": {"cpu": 12.5, "mem": 40.1}}
  ]
}"#;

pub const ALERT_DETAIL_BODY: &str = r#"{
  "success": true,
  "data": {
    "alert": {"id": 42, "timestamp": "2024-03-15T22:05:11.482913", "rule_name": "SSH_BRUTEFORCE",
              "severity": "HIGH", "message": "12 failed logins for root from 203.0.113.7",
              "log_event_id": 901},
    "evidence": [
      {"role": "TRIGGER", "event_type": "log", "event": {"id": 901, "user": "root"}}
    ]
  }
}"#;

pub const ERROR_BODY: &str = r#"{
  "status": "error",
  "message": "Failed to load alerts",
  "exception": "database is locked"
}"#;

pub const EMPTY_LIST_BODY: &str = r#"{"status": "success", "success": true, "message": "OK", "data": []}"#;
