//! Closed set of known message types, keyed by wire command string.
//!
//! [`Heading::id`](crate::protocol::Heading::id) maps the command field to
//! one of these for dispatch. The mapping is total: a command nobody
//! recognizes becomes [`Identifier::Unknown`], and whether to ignore or
//! reject such a message is routing policy, not a decode failure.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier {
    Unknown,
    Address,
    Alert,
    Block,
    BlockTransactions,
    CompactBlock,
    FeeFilter,
    FilterAdd,
    FilterClear,
    FilterLoad,
    GetAddress,
    GetBlockTransactions,
    GetBlocks,
    GetData,
    GetHeaders,
    Headers,
    Inventory,
    MemoryPool,
    MerkleBlock,
    NotFound,
    Ping,
    Pong,
    Reject,
    SendCompact,
    SendHeaders,
    Transaction,
    Verack,
    Version,
}

impl Identifier {
    /// Every identifier, [`Unknown`](Self::Unknown) included.
    pub const ALL: [Self; 28] = [
        Self::Unknown,
        Self::Address,
        Self::Alert,
        Self::Block,
        Self::BlockTransactions,
        Self::CompactBlock,
        Self::FeeFilter,
        Self::FilterAdd,
        Self::FilterClear,
        Self::FilterLoad,
        Self::GetAddress,
        Self::GetBlockTransactions,
        Self::GetBlocks,
        Self::GetData,
        Self::GetHeaders,
        Self::Headers,
        Self::Inventory,
        Self::MemoryPool,
        Self::MerkleBlock,
        Self::NotFound,
        Self::Ping,
        Self::Pong,
        Self::Reject,
        Self::SendCompact,
        Self::SendHeaders,
        Self::Transaction,
        Self::Verack,
        Self::Version,
    ];

    /// Maps a wire command string to its identifier. Total function:
    /// unrecognized commands map to [`Identifier::Unknown`].
    pub fn from_command(command: &str) -> Self {
        match command {
            "addr" => Self::Address,
            "alert" => Self::Alert,
            "block" => Self::Block,
            "blocktxn" => Self::BlockTransactions,
            "cmpctblock" => Self::CompactBlock,
            "feefilter" => Self::FeeFilter,
            "filteradd" => Self::FilterAdd,
            "filterclear" => Self::FilterClear,
            "filterload" => Self::FilterLoad,
            "getaddr" => Self::GetAddress,
            "getblocktxn" => Self::GetBlockTransactions,
            "getblocks" => Self::GetBlocks,
            "getdata" => Self::GetData,
            "getheaders" => Self::GetHeaders,
            "headers" => Self::Headers,
            "inv" => Self::Inventory,
            "mempool" => Self::MemoryPool,
            "merkleblock" => Self::MerkleBlock,
            "notfound" => Self::NotFound,
            "ping" => Self::Ping,
            "pong" => Self::Pong,
            "reject" => Self::Reject,
            "sendcmpct" => Self::SendCompact,
            "sendheaders" => Self::SendHeaders,
            "tx" => Self::Transaction,
            "verack" => Self::Verack,
            "version" => Self::Version,
            _ => Self::Unknown,
        }
    }

    /// Wire command string for this identifier; `None` for
    /// [`Unknown`](Self::Unknown), which has no canonical spelling.
    pub fn command(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Address => Some("addr"),
            Self::Alert => Some("alert"),
            Self::Block => Some("block"),
            Self::BlockTransactions => Some("blocktxn"),
            Self::CompactBlock => Some("cmpctblock"),
            Self::FeeFilter => Some("feefilter"),
            Self::FilterAdd => Some("filteradd"),
            Self::FilterClear => Some("filterclear"),
            Self::FilterLoad => Some("filterload"),
            Self::GetAddress => Some("getaddr"),
            Self::GetBlockTransactions => Some("getblocktxn"),
            Self::GetBlocks => Some("getblocks"),
            Self::GetData => Some("getdata"),
            Self::GetHeaders => Some("getheaders"),
            Self::Headers => Some("headers"),
            Self::Inventory => Some("inv"),
            Self::MemoryPool => Some("mempool"),
            Self::MerkleBlock => Some("merkleblock"),
            Self::NotFound => Some("notfound"),
            Self::Ping => Some("ping"),
            Self::Pong => Some("pong"),
            Self::Reject => Some("reject"),
            Self::SendCompact => Some("sendcmpct"),
            Self::SendHeaders => Some("sendheaders"),
            Self::Transaction => Some("tx"),
            Self::Verack => Some("verack"),
            Self::Version => Some("version"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command().unwrap_or("unknown"))
    }
}
