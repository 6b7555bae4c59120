//! Embedded HTML documents: the registration form and the confirmation page.
//!
//! Rendering is deliberately dumb -- static markup plus one timestamp
//! substitution. Field-level error spans are placeholders for whatever
//! client-side adapter displays the validation report; the server never
//! fills them in.

/// The registration form served at `GET /`.
pub const FORM_PAGE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Student Registration</title>
    <style>
      body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Inter, Arial, sans-serif; background: #0b1020; color: #e9ecff; display: grid; place-items: center; min-height: 100vh; margin: 0; padding: 24px 0; }
      .card { background: #121a35; border: 1px solid rgba(255,255,255,.12); padding: 24px; border-radius: 16px; max-width: 720px; width: 100%; box-shadow: 0 10px 30px rgba(0,0,0,.35); }
      label { display: block; margin-top: 14px; font-weight: 600; }
      input, select { width: 100%; padding: 8px; margin-top: 4px; border-radius: 8px; border: 1px solid rgba(255,255,255,.2); background: #0b1020; color: #e9ecff; }
      fieldset { border: 1px solid rgba(255,255,255,.2); border-radius: 8px; margin-top: 14px; }
      .inline label { display: inline-block; margin-right: 16px; font-weight: 400; }
      .error { display: none; color: #ff8d8d; font-size: .85em; margin-top: 4px; }
      .hp { position: absolute; left: -9999px; }
      button { margin-top: 20px; padding: 10px 18px; border-radius: 10px; border: 0; background: #6ea8ff; color: #0b1020; font-weight: 700; cursor: pointer; }
    </style>
  </head>
  <body>
    <div class="card">
      <h1>Student Registration</h1>
      <form id="regForm" method="post" action="/register" enctype="multipart/form-data" novalidate>
        <label for="firstName">First name</label>
        <input id="firstName" name="firstName" type="text" />
        <span class="error" data-for="firstName"></span>

        <label for="lastName">Last name</label>
        <input id="lastName" name="lastName" type="text" />
        <span class="error" data-for="lastName"></span>

        <div class="hp" aria-hidden="true">
          <label for="nickname">Nickname</label>
          <input id="nickname" name="nickname" type="text" tabindex="-1" autocomplete="off" />
        </div>

        <label for="email">Email</label>
        <input id="email" name="email" type="email" />
        <span class="error" data-for="email"></span>

        <label for="password">Password</label>
        <input id="password" name="password" type="password" />
        <span class="error" data-for="password"></span>

        <label for="confirm">Confirm password</label>
        <input id="confirm" name="confirm" type="password" />
        <span class="error" data-for="confirm"></span>

        <label for="phone">Phone</label>
        <input id="phone" name="phone" type="tel" />
        <span class="error" data-for="phone"></span>

        <label for="dob">Date of birth</label>
        <input id="dob" name="dob" type="date" />
        <span class="error" data-for="dob"></span>

        <fieldset class="inline">
          <legend>Gender</legend>
          <label><input type="radio" name="gender" value="female" /> Female</label>
          <label><input type="radio" name="gender" value="male" /> Male</label>
          <label><input type="radio" name="gender" value="other" /> Other</label>
          <span class="error" data-for="gender"></span>
        </fieldset>

        <label for="course">Course</label>
        <input id="course" name="course" list="courses" />
        <datalist id="courses">
          <option value="Computer Science"></option>
          <option value="Electronics"></option>
          <option value="Mathematics"></option>
          <option value="Design"></option>
        </datalist>
        <span class="error" data-for="course"></span>

        <label for="mode">Study mode</label>
        <select id="mode" name="mode">
          <option value="">Select...</option>
          <option value="full-time">Full-time</option>
          <option value="part-time">Part-time</option>
          <option value="online">Online</option>
        </select>
        <span class="error" data-for="mode"></span>

        <label for="cgpa">CGPA (optional)</label>
        <input id="cgpa" name="cgpa" type="number" step="0.01" />
        <span class="error" data-for="cgpa"></span>

        <label for="portfolio">Portfolio URL (optional)</label>
        <input id="portfolio" name="portfolio" type="url" />
        <span class="error" data-for="portfolio"></span>

        <label for="skills">Skills (multi-select)</label>
        <select id="skills" name="skills" multiple>
          <option value="ml">Machine learning</option>
          <option value="web">Web development</option>
          <option value="mobile">Mobile development</option>
          <option value="data">Data engineering</option>
        </select>

        <label for="photo">Photo (optional, PNG/JPG up to 2 MB)</label>
        <input id="photo" name="photo" type="file" accept="image/png,image/jpeg" />
        <span class="error" data-for="photo"></span>

        <fieldset class="inline">
          <legend>Preferred communication</legend>
          <label><input type="checkbox" name="comm" value="email" /> Email</label>
          <label><input type="checkbox" name="comm" value="sms" /> SMS</label>
          <label><input type="checkbox" name="comm" value="phone" /> Phone call</label>
          <span class="error" data-for="comm"></span>
        </fieldset>

        <label><input id="terms" name="terms" type="checkbox" /> I agree to the terms</label>
        <span class="error" data-for="terms"></span>

        <button type="submit">Register</button>
      </form>
    </div>
  </body>
</html>
"#;

const CONFIRMATION_TEMPLATE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Registration Received</title>
    <style>
      body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Inter, Arial, sans-serif; background: #0b1020; color: #e9ecff; display: grid; place-items: center; min-height: 100vh; margin: 0; }
      .card { background: #121a35; border: 1px solid rgba(255,255,255,.12); padding: 24px; border-radius: 16px; max-width: 720px; box-shadow: 0 10px 30px rgba(0,0,0,.35); }
      a { color: #6ea8ff; text-decoration: none; }
      .muted { color: #9fb0ff; }
    </style>
  </head>
  <body>
    <div class="card">
      <h1>Thank you! &#127881;</h1>
      <p>Your registration was received. Check the server log for a full dump of your submission.</p>
      <p class="muted">Timestamp: {submitted_at}</p>
      <p><a href="/">&larr; Back to form</a></p>
    </div>
  </body>
</html>
"#;

/// Render the confirmation page with the payload's normalized timestamp.
pub fn confirmation_page(submitted_at: &str) -> String {
    CONFIRMATION_TEMPLATE.replace("{submitted_at}", submitted_at)
}
