/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Field type normalization.
//!
//! The repository spells data types the way the FIX protocol documents do
//! (`UTCTimestamp`, `NumInGroup`, `MultipleValueString`); the dictionary format
//! uses a closed set of uppercase tokens.

use std::borrow::Cow;

/// Repository type name of repeating group counter fields.
pub const NUM_IN_GROUP: &str = "NumInGroup";

/// Canonical token of repeating group counter fields.
pub const NUM_IN_GROUP_TOKEN: &str = "NUMINGROUP";

/// Maps a repository type name to its canonical uppercase token.
///
/// Unknown names are never an error: they are uppercased as-is.
///
/// # Arguments
/// * `type_name` - The `Type` cell of a repository field
#[must_use]
pub fn canonical_type(type_name: &str) -> Cow<'static, str> {
    let token = match type_name {
        "String" => "STRING",
        "char" => "CHAR",
        "int" => "INT",
        "float" => "FLOAT",
        "Boolean" => "BOOLEAN",
        "data" => "DATA",
        "Length" => "LENGTH",
        "SeqNum" => "SEQNUM",
        "NumInGroup" => NUM_IN_GROUP_TOKEN,
        "Qty" => "QTY",
        "Price" => "PRICE",
        "Amt" => "AMT",
        "UTCTimestamp" => "UTCTIMESTAMP",
        "UTCTimeOnly" => "UTCTIMEONLY",
        "UTCDateOnly" => "UTCDATEONLY",
        "LocalMktDate" => "LOCALMKTDATE",
        "MonthYear" => "MONTHYEAR",
        "MultipleCharValue" => "MULTIPLECHARVALUE",
        "MultipleStringValue" | "MultipleValueString" => "MULTIPLESTRINGVALUE",
        "Currency" => "CURRENCY",
        "Exchange" => "EXCHANGE",
        "Country" => "COUNTRY",
        "Language" => "LANGUAGE",
        "Percentage" => "PERCENTAGE",
        "PriceOffset" => "PRICEOFFSET",
        "TZTimeOnly" => "TZTIMEONLY",
        "TZTimestamp" => "TZTIMESTAMP",
        "XMLData" => "XMLDATA",
        "Tenor" | "Pattern" | "Reserved100Plus" | "Reserved1000Plus" | "Reserved4000Plus" => {
            "STRING"
        }
        "DayOfMonth" | "long" | "TagNum" => "INT",
        other => {
            tracing::trace!(type_name = other, "unmapped repository type");
            return Cow::Owned(other.to_uppercase());
        }
    };
    Cow::Borrowed(token)
}
