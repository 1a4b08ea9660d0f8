//! Go snippets spliced into the generator output.
//!
//! Both constructors take the asset root from the first key of the
//! generator's `_bintree.Children` map and panic if that map is empty.

pub const NET_HTTP_IMPORT_LINE: &str = "\t\"net/http\"\n";

pub const ASSETFS_IMPORT_LINE: &str = "\t\"github.com/sour-is/go-assetfs/pkg/assetfs\"\n";

/// `assetFS()` returning an `http.Dir` on the live asset directory.
pub const DEBUG_ADAPTER: &str = concat!(
    "\n",
    "func assetFS() http.FileSystem {\n",
    "\tfor k := range _bintree.Children {\n",
    "\t\treturn http.Dir(k)\n",
    "\t}\n",
    "\tpanic(\"unreachable\")\n",
    "}\n",
);

/// `assetFS()` returning an `*assetfs.AssetFS` over the embedded accessors.
pub const EMBEDDED_ADAPTER: &str = concat!(
    "\n",
    "func assetFS() *assetfs.AssetFS {\n",
    "\tassetInfo := func(path string) (os.FileInfo, error) {\n",
    "\t\treturn os.Stat(path)\n",
    "\t}\n",
    "\tfor k := range _bintree.Children {\n",
    "\t\treturn &assetfs.AssetFS{Asset: Asset, AssetDir: AssetDir, AssetInfo: assetInfo, Prefix: k}\n",
    "\t}\n",
    "\tpanic(\"unreachable\")\n",
    "}\n",
);
