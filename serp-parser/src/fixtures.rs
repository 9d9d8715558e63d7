//! Hand-written result pages, one per layout, trimmed to the markup the
//! rulesets look at.

pub const GOOGLE_DESKTOP_PAGE: &str = r#"<!doctype html>
<html><head><title>rust web framework - Google Search</title></head>
<body>
  <form><textarea name="q">rust web framework</textarea></form>
  <div id="appbar"><div id="result-stats">About 12,400,000 results<nobr> (0.38 seconds)&nbsp;</nobr></div></div>
  <div id="search">
    <div id="tads">
      <div class="uEierd">
        <a class="sVXRqc" href="https://www.shuttle.dev/deploy"><div role="heading">Deploy Rust in one command</div></a>
        <div class="MUxGbd yDYNvb">Ship Axum and Actix apps without Docker.</div>
      </div>
    </div>
    <div id="rso">
      <div class="g">
        <div class="yuRUbf"><a href="https://github.com/tokio-rs/axum"><h3>tokio-rs/axum: Ergonomic and modular web framework</h3></a></div>
        <div class="VwiC3b">Ergonomic and modular web framework built with Tokio, Tower, and Hyper.</div>
      </div>
      <div class="g">
        <div class="yuRUbf"><a href="https://rocket.rs/"><h3>Rocket - Simple, Fast, Type-Safe Web Framework for Rust</h3></a></div>
        <div class="VwiC3b">Rocket is a web framework for Rust that makes it simple to write fast web applications.</div>
      </div>
      <g-section-with-header><video-voyager>
        <div class="VibNM">
          <a href="https://www.youtube.com/watch?v=Wnb_n5YktO8"><div class="fc9yUc">Axum in 100 seconds</div></a>
          <div class="pcJO7e"><cite>YouTube</cite><span>Fireship</span></div>
          <div class="hMJ0yc">Mar 2, 2024</div>
          <div class="J1mWY">2:14</div>
        </div>
      </video-voyager></g-section-with-header>
      <div class="g"><h3>Placeholder block without a link</h3></div>
      <div class="g">
        <div class="yuRUbf"><a href="https://actix.rs/docs/"><h3>Actix Web docs</h3></a></div>
        <div class="IsZvec">Getting started with Actix Web.</div>
      </div>
      <g-section-with-header><div class="JJZKK">
        <a class="WlydOe" href="https://www.infoq.com/news/2024/axum-0-7/">
          <div class="CEMjEf">InfoQ</div>
          <div role="heading">Axum 0.7 ships with hyper 1.0</div>
          <div class="OSrXXb">3 weeks ago</div>
        </a>
      </div></g-section-with-header>
      <div class="g">
        <div class="yuRUbf"><a href="/url?q=https://www.arewewebyet.org/&amp;sa=U"><h3>Are we web yet?</h3></a></div>
      </div>
    </div>
  </div>
  <div id="botstuff">
    <div id="brs">
      <p><a href="/search?q=rust+web+framework+comparison">rust web framework <b>comparison</b></a></p>
      <p><a href="/search?q=best+rust+web+framework">best rust web framework</a></p>
    </div>
  </div>
  <div id="foot"><table><tr>
    <td class="YyVfkd">1</td>
    <td><a class="fl" href="/search?q=rust+web+framework&amp;start=10">2</a></td>
    <td><a class="fl" href="/search?q=rust+web+framework&amp;start=20">3</a></td>
    <td><a class="fl" href="/search?q=rust+web+framework&amp;start=10">Next</a></td>
  </tr></table></div>
</body></html>"#;

pub const GOOGLE_NO_RESULTS_PAGE: &str = r#"<html><body>
  <form><input name="q" value="qwxzvbnmlkj rust"></form>
  <div id="topstuff">
    <div class="card-section">
      <p>Your search - <em>qwxzvbnmlkj rust</em> - did not match any documents.</p>
    </div>
  </div>
  <div id="tads"><div class="uEierd"><a class="sVXRqc" href="https://ads.example/">Ad</a></div></div>
</body></html>"#;

pub const GOOGLE_HOTELS_PAGE: &str = r#"<html><body>
  <form><input name="q" value="hotels in lisbon"></form>
  <div id="search"><div id="rso">
    <div class="zd2Jbb">
      <div class="ntKMYc">
        <div class="hmHBZd">
          <div class="BTPx6e">Memmo Alfama</div>
          <span class="fTKmHE99XE4__star">4.6</span><span class="jdzyBc">(1.8K)</span>
        </div>
        <div class="hmHBZd">
          <div class="BTPx6e">Hostel Baixa</div>
          <span class="fTKmHE99XE4__star">4.1</span><span class="jdzyBc">(423)</span>
        </div>
      </div>
    </div>
  </div></div>
</body></html>"#;

pub const GOOGLE_NOJS_PAGE: &str = r#"<html><body>
  <form><input name="q" value="rust ide"></form>
  <div id="main">
    <div id="tads">
      <div class="uEierd">
        <a class="C8nzq" href="/aclk?sa=l&amp;ai=DChcSEwiQ&amp;adurl="><div role="heading">RustRover - JetBrains</div></a>
        <div class="MUxGbd yDYNvb">A dedicated Rust IDE.</div>
      </div>
    </div>
    <div class="ZINbbc xpd">
      <div class="kCrYT"><a href="/url?q=https://rust-analyzer.github.io/&amp;sa=U"><h3><div>rust-analyzer</div></h3></a></div>
      <div class="kCrYT"><div class="BNeawe s3v9rd AP7Wnd">Bringing a great IDE experience to Rust.</div></div>
    </div>
    <table id="nav"><tr><td class="cur">1</td><td><a href="/search?q=rust+ide&amp;start=10">2</a></td></tr></table>
  </div>
</body></html>"#;

pub const GOOGLE_MOBILE_PAGE: &str = r#"<html><body>
  <form><input name="q" value="ferris crab"></form>
  <div id="rso">
    <div class="mnr-c xpd">
      <a class="C8nzq" href="https://rustacean.net/"><div role="heading">Rustacean.net: Home of Ferris the Crab</div></a>
      <div class="yDYNvb">Ferris is the unofficial mascot of Rust.</div>
    </div>
    <div class="mnr-c xpd">
      <a class="C8nzq" href="https://en.wikipedia.org/wiki/Rust_(programming_language)"><div role="heading">Rust (programming language)</div></a>
      <div class="lyLwlc">Rust is a general-purpose programming language.</div>
    </div>
  </div>
</body></html>"#;

pub const BING_PAGE: &str = r#"<html><body>
  <form><input id="sb_form_q" name="q" value="rust async runtime"></form>
  <div id="b_content">
    <div id="b_tween"><span class="sb_count">About 1,020,000 results</span></div>
    <ol id="b_results">
      <li class="b_ad"><ul><li><div class="sb_add">
        <h2><a href="/aclk?ld=e8B7&amp;u=aHR0cHM6Ly9leGFtcGxlLmNvbQ">Async Rust Training</a></h2>
        <div class="b_caption"><p>Two-day workshop on Tokio.</p></div>
      </div></li></ul></li>
      <li class="b_algo">
        <h2><a href="https://tokio.rs/">Tokio - An asynchronous Rust runtime</a></h2>
        <div class="b_caption"><p>Tokio is an asynchronous runtime for the Rust programming language.</p></div>
        <div class="b_deep"><ul>
          <li><h3><a href="https://tokio.rs/tokio/tutorial">Tutorial</a></h3><p>Learn the basics of Tokio.</p></li>
          <li><h3><a href="https://tokio.rs/blog">Blog</a></h3></li>
        </ul></div>
      </li>
      <li class="b_algo">
        <h2><a href="https://docs.rs/async-std">async_std - Rust</a></h2>
        <div class="b_algoSlug">Async version of the Rust standard library.</div>
      </li>
      <li class="b_pag"><ul>
        <li><a class="sb_pagS" href="/search?q=rust+async+runtime">1</a></li>
        <li><a href="/search?q=rust+async+runtime&amp;first=11">2</a></li>
      </ul></li>
    </ol>
    <div class="b_rs"><ul><li><a href="/search?q=tokio+vs+async-std">tokio vs async-std</a></li></ul></div>
  </div>
</body></html>"#;

/// Ten desktop results; the fourth carries two inline sitelinks.
pub fn ten_results_one_with_sitelinks() -> String {
    let items: String = (1..=10)
        .map(|n| {
            let sitelinks = if n == 4 {
                r#"<div class="HiHjCd"><a href="/docs">Docs</a> · <a href="/api">API</a></div>"#
            } else {
                ""
            };
            format!(
                r#"<div class="g">
                     <div class="yuRUbf"><a href="https://site{n}.example/page"><h3>Result {n}</h3></a></div>
                     <div class="VwiC3b">Snippet {n}</div>
                     {sitelinks}
                   </div>"#
            )
        })
        .collect();
    format!(r#"<html><body><div id="search"><div id="rso">{items}</div></div></body></html>"#)
}
