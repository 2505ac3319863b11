//! Storage backend drivers

use std::fmt;
use std::str::FromStr;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// Cache backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CacheDriver {
    /// APCu shared memory
    Apcu,
    /// Files on local disk
    #[default]
    File,
    /// Process memory, gone on exit
    Memory,
    /// Redis server
    Redis,
    /// Memcached server
    Memcached,
    /// Table in the application database
    Database,
}

impl CacheDriver {
    /// Parse a driver name, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "apcu" => Ok(CacheDriver::Apcu),
            "file" => Ok(CacheDriver::File),
            "memory" => Ok(CacheDriver::Memory),
            "redis" => Ok(CacheDriver::Redis),
            "memcached" => Ok(CacheDriver::Memcached),
            "database" => Ok(CacheDriver::Database),
            _ => Err(EnumError::InvalidCacheDriver(value.to_string())),
        }
    }

    /// Whether `value` names a cache driver
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Backend lives inside the process and is lost on restart
    pub fn is_in_process(self) -> bool {
        matches!(self, CacheDriver::Apcu | CacheDriver::Memory)
    }
}

impl ClosedSet for CacheDriver {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        CacheDriver::Apcu,
        CacheDriver::File,
        CacheDriver::Memory,
        CacheDriver::Redis,
        CacheDriver::Memcached,
        CacheDriver::Database,
    ];

    fn name(self) -> &'static str {
        match self {
            CacheDriver::Apcu => "APCU",
            CacheDriver::File => "FILE",
            CacheDriver::Memory => "MEMORY",
            CacheDriver::Redis => "REDIS",
            CacheDriver::Memcached => "MEMCACHED",
            CacheDriver::Database => "DATABASE",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            CacheDriver::Apcu => "apcu",
            CacheDriver::File => "file",
            CacheDriver::Memory => "memory",
            CacheDriver::Redis => "redis",
            CacheDriver::Memcached => "memcached",
            CacheDriver::Database => "database",
        }
    }
}

impl CaseProjection for CacheDriver {}

impl FromStr for CacheDriver {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CacheDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

/// Database backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DatabaseDriver {
    #[default]
    Mysql,
    Postgresql,
    Sqlite,
    Mongodb,
    /// Microsoft SQL Server
    Sqlserver,
    Oracle,
    Redis,
    Cassandra,
    Dynamodb,
    Couchbase,
    Elasticsearch,
    Clickhouse,
    /// MySQL wire-compatible
    Mariadb,
    /// PostgreSQL wire-compatible
    Cockroachdb,
    Firebird,
}

impl DatabaseDriver {
    /// Parse a driver name, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "mysql" => Ok(DatabaseDriver::Mysql),
            "postgresql" => Ok(DatabaseDriver::Postgresql),
            "sqlite" => Ok(DatabaseDriver::Sqlite),
            "mongodb" => Ok(DatabaseDriver::Mongodb),
            "sqlserver" => Ok(DatabaseDriver::Sqlserver),
            "oracle" => Ok(DatabaseDriver::Oracle),
            "redis" => Ok(DatabaseDriver::Redis),
            "cassandra" => Ok(DatabaseDriver::Cassandra),
            "dynamodb" => Ok(DatabaseDriver::Dynamodb),
            "couchbase" => Ok(DatabaseDriver::Couchbase),
            "elasticsearch" => Ok(DatabaseDriver::Elasticsearch),
            "clickhouse" => Ok(DatabaseDriver::Clickhouse),
            "mariadb" => Ok(DatabaseDriver::Mariadb),
            "cockroachdb" => Ok(DatabaseDriver::Cockroachdb),
            "firebird" => Ok(DatabaseDriver::Firebird),
            _ => Err(EnumError::InvalidDatabaseDriver(value.to_string())),
        }
    }

    /// Whether `value` names a database driver
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Speaks SQL (including the MySQL and PostgreSQL wire-compatible forks)
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            DatabaseDriver::Mysql
                | DatabaseDriver::Postgresql
                | DatabaseDriver::Sqlite
                | DatabaseDriver::Sqlserver
                | DatabaseDriver::Oracle
                | DatabaseDriver::Mariadb
                | DatabaseDriver::Cockroachdb
                | DatabaseDriver::Firebird
        )
    }
}

impl ClosedSet for DatabaseDriver {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        DatabaseDriver::Mysql,
        DatabaseDriver::Postgresql,
        DatabaseDriver::Sqlite,
        DatabaseDriver::Mongodb,
        DatabaseDriver::Sqlserver,
        DatabaseDriver::Oracle,
        DatabaseDriver::Redis,
        DatabaseDriver::Cassandra,
        DatabaseDriver::Dynamodb,
        DatabaseDriver::Couchbase,
        DatabaseDriver::Elasticsearch,
        DatabaseDriver::Clickhouse,
        DatabaseDriver::Mariadb,
        DatabaseDriver::Cockroachdb,
        DatabaseDriver::Firebird,
    ];

    fn name(self) -> &'static str {
        match self {
            DatabaseDriver::Mysql => "MYSQL",
            DatabaseDriver::Postgresql => "POSTGRESQL",
            DatabaseDriver::Sqlite => "SQLITE",
            DatabaseDriver::Mongodb => "MONGODB",
            DatabaseDriver::Sqlserver => "SQLSERVER",
            DatabaseDriver::Oracle => "ORACLE",
            DatabaseDriver::Redis => "REDIS",
            DatabaseDriver::Cassandra => "CASSANDRA",
            DatabaseDriver::Dynamodb => "DYNAMODB",
            DatabaseDriver::Couchbase => "COUCHBASE",
            DatabaseDriver::Elasticsearch => "ELASTICSEARCH",
            DatabaseDriver::Clickhouse => "CLICKHOUSE",
            DatabaseDriver::Mariadb => "MARIADB",
            DatabaseDriver::Cockroachdb => "COCKROACHDB",
            DatabaseDriver::Firebird => "FIREBIRD",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            DatabaseDriver::Mysql => "mysql",
            DatabaseDriver::Postgresql => "postgresql",
            DatabaseDriver::Sqlite => "sqlite",
            DatabaseDriver::Mongodb => "mongodb",
            DatabaseDriver::Sqlserver => "sqlserver",
            DatabaseDriver::Oracle => "oracle",
            DatabaseDriver::Redis => "redis",
            DatabaseDriver::Cassandra => "cassandra",
            DatabaseDriver::Dynamodb => "dynamodb",
            DatabaseDriver::Couchbase => "couchbase",
            DatabaseDriver::Elasticsearch => "elasticsearch",
            DatabaseDriver::Clickhouse => "clickhouse",
            DatabaseDriver::Mariadb => "mariadb",
            DatabaseDriver::Cockroachdb => "cockroachdb",
            DatabaseDriver::Firebird => "firebird",
        }
    }
}

impl CaseProjection for DatabaseDriver {}

impl FromStr for DatabaseDriver {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_driver_parse_ignores_case() {
        assert_eq!(CacheDriver::parse("FiLe").unwrap(), CacheDriver::File);
        assert_eq!(CacheDriver::parse("REDIS").unwrap(), CacheDriver::Redis);
        assert_eq!(CacheDriver::parse("memcached").unwrap(), CacheDriver::Memcached);
    }

    #[test]
    fn test_cache_driver_invalid() {
        let err = CacheDriver::parse("invalid").unwrap_err();
        assert_eq!(err.to_string(), "Invalid cache driver: invalid");
        assert!(!CacheDriver::is_valid(""));
        assert!(CacheDriver::is_valid("APCU"));
    }

    #[test]
    fn test_cache_driver_accessors() {
        let d = CacheDriver::Memcached;
        assert_eq!(d.name(), "MEMCACHED");
        assert_eq!(d.as_str(), "memcached");
        assert_eq!(d.lowercase(), "memcached");
        assert_eq!(d.uppercase(), "MEMCACHED");
        assert_eq!(d.title_case(), "Memcached");
    }

    #[test]
    fn test_cache_driver_record() {
        let json = serde_json::to_value(CacheDriver::Redis.to_record()).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "REDIS", "value": "redis" }));
    }

    #[test]
    fn test_cache_driver_all_in_order() {
        assert_eq!(
            CacheDriver::wires(),
            vec!["apcu", "file", "memory", "redis", "memcached", "database"]
        );
    }

    #[test]
    fn test_cache_driver_in_process() {
        assert!(CacheDriver::Apcu.is_in_process());
        assert!(CacheDriver::Memory.is_in_process());
        assert!(!CacheDriver::File.is_in_process());
        assert!(!CacheDriver::Redis.is_in_process());
        assert!(!CacheDriver::Memcached.is_in_process());
        assert!(!CacheDriver::Database.is_in_process());
    }

    #[test]
    fn test_database_driver_parse() {
        assert_eq!(
            DatabaseDriver::parse("PostgreSQL").unwrap(),
            DatabaseDriver::Postgresql
        );
        assert_eq!(
            "CockroachDB".parse::<DatabaseDriver>().unwrap(),
            DatabaseDriver::Cockroachdb
        );
        let err = DatabaseDriver::parse("db2").unwrap_err();
        assert_eq!(err.to_string(), "Invalid database driver: db2");
    }

    #[test]
    fn test_database_driver_cases() {
        let d = DatabaseDriver::Elasticsearch;
        assert_eq!(d.title_case(), "Elasticsearch");
        assert_eq!(d.snake_case(), "elasticsearch");
        assert_eq!(d.kebab_case(), "elasticsearch");
        assert_eq!(d.uppercase(), "ELASTICSEARCH");
    }

    #[test]
    fn test_database_driver_count() {
        assert_eq!(DatabaseDriver::all().len(), 15);
        assert!(DatabaseDriver::Mariadb.is_relational());
        assert!(!DatabaseDriver::Dynamodb.is_relational());
    }

    #[test]
    fn test_redis_is_shared_wire_value_across_kinds() {
        assert_eq!(CacheDriver::Redis.as_str(), DatabaseDriver::Redis.as_str());
    }
}
