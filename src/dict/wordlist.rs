use crate::trie::Trie;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Counts gathered while filling a trie from word lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub words_read: usize,
    pub inserted: usize,
    pub duplicates: usize,
}

impl LoadReport {
    fn absorb(&mut self, other: LoadReport) {
        self.words_read += other.words_read;
        self.inserted += other.inserted;
        self.duplicates += other.duplicates;
    }
}

/// Split word list content into words, skipping blank and `#` comment lines
pub fn parse_words(content: &str, case_sensitive: bool) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(move |word| {
            if case_sensitive {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
}

/// Insert every word of `content` into `trie`
pub fn load_str(trie: &mut Trie, content: &str, case_sensitive: bool) -> LoadReport {
    let mut report = LoadReport::default();

    for word in parse_words(content, case_sensitive) {
        report.words_read += 1;
        if trie.insert(&word) {
            report.inserted += 1;
        } else {
            report.duplicates += 1;
        }
    }

    report
}

pub fn load_file(trie: &mut Trie, path: &Path, case_sensitive: bool) -> Result<LoadReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;

    let report = load_str(trie, &content, case_sensitive);
    log::debug!(
        "loaded {} ({} words, {} duplicates)",
        path.display(),
        report.inserted,
        report.duplicates
    );

    Ok(report)
}

/// Build a trie from the given word lists, falling back to the embedded
/// list when none are given
pub fn build_trie(paths: &[impl AsRef<Path>], case_sensitive: bool) -> Result<(Trie, LoadReport)> {
    let mut trie = Trie::new();
    let mut report = LoadReport::default();

    if paths.is_empty() {
        log::info!("no word list configured, using embedded word list");
        report = load_str(&mut trie, EMBEDDED_WORDS, case_sensitive);
        return Ok((trie, report));
    }

    for path in paths {
        report.absorb(load_file(&mut trie, path.as_ref(), case_sensitive)?);
    }

    Ok((trie, report))
}

/// Minimal bootstrap word list
const EMBEDDED_WORDS: &str = "\
# Most common English words
the
be
to
of
and
a
in
that
have
i
it
for
not
on
with
he
as
you
do
at
this
but
his
by
from
they
we
say
her
she
or
an
will
my
one
all
would
there
their
what
so
up
out
if
about
who
get
which
go
me
when
make
can
like
time
no
just
him
know
take
people
into
year
your
good
some
could
them
see
other
than
then
now
look
only
come
its
over
think
also
back
after
use
two
how
our
work
first
well
way
even
new
want
because
any
these
give
day
most
us
# Common programming terms
function
class
method
variable
string
integer
boolean
array
list
dictionary
object
parameter
return
import
export
error
exception
test
debug
compile
build
version
configuration
";
